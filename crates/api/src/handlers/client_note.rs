//! Handlers for notes nested under `/client/{id}/note`.

use axum::extract::State;
use axum::Json;

use crm_core::client_notes::{resolve_category, validate_note_content};
use crm_db::models::client_note::{ClientNote, CreateClientNote};
use crm_db::repositories::ClientNoteRepo;

use crate::error::AppResult;
use crate::extract::{ClientId, JsonBody};
use crate::handlers::client::ensure_client_exists;
use crate::middleware::auth::AuthUser;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /client/{id}/note
///
/// List a client's notes, most recent first.
pub async fn list_notes(
    _auth: AuthUser,
    State(state): State<AppState>,
    ClientId(client_id): ClientId,
) -> AppResult<Json<ListResponse<ClientNote>>> {
    ensure_client_exists(&state.pool, client_id).await?;

    let notes = ClientNoteRepo::list_for_client(&state.pool, client_id).await?;
    Ok(Json(notes.into()))
}

/// POST /client/{id}/note
///
/// Create a note authored by the caller. Category and content are checked
/// before anything touches the database.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    ClientId(client_id): ClientId,
    JsonBody(mut input): JsonBody<CreateClientNote>,
) -> AppResult<Json<ClientNote>> {
    let category = resolve_category(input.category.as_deref())?;
    input.category = Some(category.to_string());
    validate_note_content(&input.content)?;

    ensure_client_exists(&state.pool, client_id).await?;

    let note = ClientNoteRepo::create(&state.pool, client_id, auth.user_id, &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        client_id = %client_id,
        note_id = %note.id,
        category = %note.category,
        "Client note created"
    );

    Ok(Json(note))
}
