use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON extractor that answers every undecodable body with `AppError::InvalidPayload`.
///
/// The body is decoded regardless of the `Content-Type` header, so clients
/// that post JSON as `text/plain` are still accepted.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(AppJsonRejection::Json)
    }
}

pub enum AppJsonRejection {
    /// Body could not be read (e.g. it exceeds the configured limit)
    Body(BytesRejection),
    Json(serde_json::Error),
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self {
            AppJsonRejection::Body(rejection) => rejection.into_response(),
            AppJsonRejection::Json(err) => {
                tracing::warn!("Invalid JSON payload for book demo: {}", err);
                AppError::InvalidPayload.into_response()
            }
        }
    }
}
