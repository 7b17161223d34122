//! Handlers for the `/client` resource.

use axum::extract::State;
use axum::Json;

use crm_core::clients::{normalize_email, validate_email, validate_name};
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::client::{Client, CreateClient};
use crm_db::repositories::ClientRepo;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::{ClientId, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response::ListResponse;
use crate::state::AppState;

/// Verify that a client exists, returning 404 if not.
pub async fn ensure_client_exists(pool: &sqlx::PgPool, client_id: DbId) -> AppResult<()> {
    if !ClientRepo::exists(pool, client_id).await? {
        return Err(client_not_found(client_id));
    }
    Ok(())
}

fn client_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Client",
        id,
    })
}

/// GET /client
///
/// List all clients with their derived `last_contacted_at`.
pub async fn list_clients(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients.into()))
}

/// GET /client/{id}
pub async fn get_client(
    _auth: AuthUser,
    State(state): State<AppState>,
    ClientId(id): ClientId,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| client_not_found(id))?;
    Ok(Json(client))
}

/// POST /client
///
/// Create a client. The email is lower-cased; reusing an existing email in
/// any letter case is a 409.
pub async fn create_client(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(mut input): JsonBody<CreateClient>,
) -> AppResult<Json<Client>> {
    input.email = normalize_email(&input.email);
    validate_email(&input.email)?;
    validate_name("first_name", &input.first_name)?;
    validate_name("last_name", &input.last_name)?;

    let client = ClientRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "uq_client_email") {
                AppError::Core(CoreError::Conflict(
                    "A client with this email already exists".into(),
                ))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(
        user_id = %auth.user_id,
        client_id = %client.id,
        "Client created"
    );

    Ok(Json(client))
}
