//! Credentials and access tokens.
//!
//! - [`password`]: Argon2id hashing for stored passwords.
//! - [`jwt`]: issuing and verifying bearer tokens.

pub mod jwt;
pub mod password;
