//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod client_note_repo;
pub mod client_repo;
pub mod user_repo;

pub use client_note_repo::ClientNoteRepo;
pub use client_repo::ClientRepo;
pub use user_repo::UserRepo;
