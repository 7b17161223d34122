//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the read query
//! - A `Deserialize` create DTO for inserts
//!
//! Clients and notes are append-only, so there are no update DTOs.

pub mod client;
pub mod client_note;
pub mod user;
