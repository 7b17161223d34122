//! Repository for the `client` table.
//!
//! Reads always carry the derived `last_contacted_at`, computed by grouping
//! `client_note` by owner and left-joining the per-client maximum onto the
//! client set. `find_by_id` and `list` share the same statement so both
//! report identical values for the same client.

use crm_core::clients::normalize_email;
use crm_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};

/// Client rows left-joined with the most recent note time per client.
///
/// Clients without notes survive the outer join with a NULL
/// `last_contacted_at`. Expands to a literal for use with `concat!`.
macro_rules! select_with_last_contact {
    () => {
        "SELECT c.id, c.email, c.first_name, c.last_name, c.assigned_user_id,
                c.created_at, c.updated_at, ln.last_contacted_at
         FROM client c
         LEFT JOIN (
             SELECT client_id, MAX(created_at) AS last_contacted_at
             FROM client_note
             GROUP BY client_id
         ) ln ON ln.client_id = c.id"
    };
}

/// Provides create and read operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// The email is lower-cased before insert. A duplicate email fails with
    /// a unique violation on `uq_client_email`.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = "INSERT INTO client (id, email, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, first_name, last_name, assigned_user_id,
                       created_at, updated_at, NULL::timestamptz AS last_contacted_at";
        sqlx::query_as::<_, Client>(query)
            .bind(new_id())
            .bind(normalize_email(&input.email))
            .bind(input.first_name.trim())
            .bind(input.last_name.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a client by ID, including its derived `last_contacted_at`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = concat!(select_with_last_contact!(), " WHERE c.id = $1");
        sqlx::query_as::<_, Client>(query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = concat!(
            select_with_last_contact!(),
            " ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, Client>(query).fetch_all(pool).await
    }

    /// Check whether a client with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM client WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
