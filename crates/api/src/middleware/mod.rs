//! Request extractors that run before any handler body.
//!
//! - [`auth::AuthUser`] -- the verified caller identity from a JWT Bearer token.

pub mod auth;
