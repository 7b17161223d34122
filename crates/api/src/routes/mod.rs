pub mod auth;
pub mod client;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete route tree. Everything is mounted at the root:
///
/// ```text
/// /health                          service health (public)
/// /auth/login                      login (public)
/// /auth/me                         current user
///
/// /client                          list, create
/// /client/{id}                     get
/// /client/{id}/note                list, create
/// ```
///
/// Every route except `/health` and `/auth/login` requires a Bearer token.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/client", client::router())
}
