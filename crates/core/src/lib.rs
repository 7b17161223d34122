//! Shared domain types, errors, and validation rules for the CRM backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build on
//! these definitions so that normalisation and validation happen the same way
//! no matter which layer calls them.

pub mod client_notes;
pub mod clients;
pub mod error;
pub mod types;
