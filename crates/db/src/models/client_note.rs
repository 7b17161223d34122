//! Client note model.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `client_note` row joined with its creator's display identity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientNote {
    pub id: DbId,
    pub client_id: DbId,
    pub creator_user_id: DbId,
    /// The creator's email address.
    pub creator_name: String,
    pub content: String,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for creating a note. `category` falls back to `"note"` when absent.
#[derive(Debug, Deserialize)]
pub struct CreateClientNote {
    pub content: String,
    pub category: Option<String>,
}
