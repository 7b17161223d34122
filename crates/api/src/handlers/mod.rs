//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate input, delegate to the repositories in `crm_db`, and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod client;
pub mod client_note;
