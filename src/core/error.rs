use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{
    MSG_INVALID_PAYLOAD, MSG_MISSING_REQUIRED_FIELDS, MSG_SERVICE_UNAVAILABLE,
    MSG_UPSTREAM_REJECTED, MSG_UPSTREAM_TIMEOUT, MSG_UPSTREAM_UNREACHABLE,
};
use crate::shared::types::ErrorResponse;

/// Client-facing outcomes of the booking gateway.
///
/// Upstream diagnostics are logged where the error is created; only the fixed
/// message of each variant ever reaches the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid JSON payload")]
    InvalidPayload,

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Booking service is not configured")]
    ServiceUnavailable,

    #[error("Booking rejected by upstream")]
    UpstreamRejected,

    #[error("Booking service unreachable")]
    UpstreamUnreachable,

    #[error("Booking service timed out")]
    UpstreamTimeout,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload | AppError::MissingRequiredFields => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamRejected | AppError::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidPayload => MSG_INVALID_PAYLOAD,
            AppError::MissingRequiredFields => MSG_MISSING_REQUIRED_FIELDS,
            AppError::ServiceUnavailable => MSG_SERVICE_UNAVAILABLE,
            AppError::UpstreamRejected => MSG_UPSTREAM_REJECTED,
            AppError::UpstreamUnreachable => MSG_UPSTREAM_UNREACHABLE,
            AppError::UpstreamTimeout => MSG_UPSTREAM_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.client_message()));

        (self.status_code(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
