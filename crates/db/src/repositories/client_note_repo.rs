//! Repository for the `client_note` table.

use crm_core::client_notes::DEFAULT_NOTE_CATEGORY;
use crm_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::client_note::{ClientNote, CreateClientNote};

/// Note rows joined with the creator's email as `creator_name`.
macro_rules! select_with_creator {
    () => {
        "SELECT n.id, n.client_id, n.creator_user_id, u.email AS creator_name,
                n.content, n.category, n.created_at
         FROM client_note n
         JOIN users u ON u.id = n.creator_user_id"
    };
}

/// Provides create and list operations for client notes.
pub struct ClientNoteRepo;

impl ClientNoteRepo {
    /// Insert a note for a client and return it with the creator's identity.
    ///
    /// The category is expected to be validated already; `None` stores
    /// the default. Insert and read-back run in one transaction.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        creator_user_id: DbId,
        input: &CreateClientNote,
    ) -> Result<ClientNote, sqlx::Error> {
        let category = input.category.as_deref().unwrap_or(DEFAULT_NOTE_CATEGORY);
        let id = new_id();

        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO client_note (id, client_id, creator_user_id, content, category)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(client_id)
        .bind(creator_user_id)
        .bind(&input.content)
        .bind(category)
        .execute(&mut *tx)
        .await?;

        let query = concat!(select_with_creator!(), " WHERE n.id = $1");
        let note = sqlx::query_as::<_, ClientNote>(query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(note)
    }

    /// List all notes for a client, newest first.
    ///
    /// Ties on `created_at` fall back to the time-ordered id.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ClientNote>, sqlx::Error> {
        let query = concat!(
            select_with_creator!(),
            " WHERE n.client_id = $1 ORDER BY n.created_at DESC, n.id DESC"
        );
        sqlx::query_as::<_, ClientNote>(query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }
}
