use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::book_demo::dtos::BookDemoRequest;
use crate::features::book_demo::services::BookingService;
use crate::shared::types::{ErrorResponse, OkResponse};

/// Book a product demo
///
/// Public endpoint behind the "Book a demo" dialog. Validates the contact
/// details and creates a Lead in the CRM.
#[utoipa::path(
    post,
    path = "/api/book-demo",
    request_body = BookDemoRequest,
    responses(
        (status = 200, description = "Lead created", body = OkResponse),
        (status = 400, description = "Invalid JSON or missing name/email", body = ErrorResponse),
        (status = 502, description = "CRM rejected the lead or could not be reached", body = ErrorResponse),
        (status = 503, description = "CRM integration is not configured", body = ErrorResponse),
        (status = 504, description = "CRM did not answer in time", body = ErrorResponse)
    ),
    tag = "book-demo"
)]
pub async fn book_demo(
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<BookDemoRequest>,
) -> Result<Json<OkResponse>> {
    service.submit(dto).await?;

    Ok(Json(OkResponse::new()))
}
