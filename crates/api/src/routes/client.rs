//! Route definitions for clients and their notes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, client_note};
use crate::state::AppState;

/// Routes mounted at `/client`.
///
/// ```text
/// GET  /              list_clients
/// POST /              create_client
/// GET  /{id}          get_client
/// GET  /{id}/note     list_notes
/// POST /{id}/note     create_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list_clients).post(client::create_client))
        .route("/{id}", get(client::get_client))
        .route(
            "/{id}/note",
            get(client_note::list_notes).post(client_note::create_note),
        )
}
