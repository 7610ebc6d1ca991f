use utoipa::{Modify, OpenApi};

use crate::features::book_demo::{dtos as book_demo_dtos, handlers as book_demo_handlers};
use crate::shared::types::{ErrorResponse, OkResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Book demo (public)
        book_demo_handlers::book_demo,
    ),
    components(
        schemas(
            // Shared
            OkResponse,
            ErrorResponse,
            // Book demo
            book_demo_dtos::BookDemoRequest,
        )
    ),
    tags(
        (name = "book-demo", description = "Demo requests from the marketing site")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
