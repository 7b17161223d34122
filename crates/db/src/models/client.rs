//! Client entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row, enriched with the derived `last_contacted_at`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Client {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub assigned_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// `MAX(client_note.created_at)` for this client; `None` when it has no notes.
    pub last_contacted_at: Option<Timestamp>,
}

/// DTO for creating a new client.
///
/// The email is normalised by the repository; callers may pass it as typed.
#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
