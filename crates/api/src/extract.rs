//! Request extractors whose rejections use the JSON error envelope.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; handlers take
//! these wrappers instead so that every failure reaches the caller as an
//! [`AppError`].

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use crm_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON request body.
///
/// Malformed JSON is a 400; well-formed JSON with missing or mistyped
/// fields is a 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// The `{id}` segment of a `/client/{id}` route.
///
/// A segment that is not a UUID cannot name any client, so it is reported
/// exactly like a well-formed id with no matching row: 404.
#[derive(Debug, Clone, Copy)]
pub struct ClientId(pub DbId);

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!(error = %err.body_text(), "Unparseable client id");
                Err(AppError::NotFound("Client"))
            }
            Err(other) => Err(AppError::Internal(other.body_text())),
        }
    }
}
