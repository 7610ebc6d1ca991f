use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::book_demo::handlers;
use crate::features::book_demo::services::BookingService;
use crate::shared::constants::BOOK_DEMO_PATH;

/// Create routes for the book-demo feature
///
/// Note: This feature is public (no authentication required) as it's used
/// by the marketing site's demo dialog.
pub fn routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(BOOK_DEMO_PATH, post(handlers::book_demo))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CrmConfig;
    use crate::features::book_demo::clients::LeadSink;
    use crate::shared::test_helpers::{RecordingSink, SinkReply};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn server(sink: Option<Arc<RecordingSink>>) -> TestServer {
        let lead_sink = sink.map(|s| s as Arc<dyn LeadSink>);
        TestServer::new(routes(Arc::new(BookingService::new(lead_sink)))).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_ok() {
        let sink = RecordingSink::new(SinkReply::Created);
        let server = server(Some(sink.clone()));

        let response = server
            .post("/api/book-demo")
            .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "ok": true }));
        assert_eq!(sink.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_returns_400() {
        let sink = RecordingSink::new(SinkReply::Created);
        let server = server(Some(sink.clone()));

        let response = server.post("/api/book-demo").text("{ not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid JSON payload." }));
        assert_eq!(sink.calls(), 0);
    }

    #[tokio::test]
    async fn test_wrongly_typed_fields_are_invalid_payload() {
        let server = server(Some(RecordingSink::new(SinkReply::Created)));

        let response = server
            .post("/api/book-demo")
            .json(&json!({ "name": 42, "email": "jane@co.coop" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid JSON payload." }));
    }

    #[tokio::test]
    async fn test_json_without_content_type_is_accepted() {
        let sink = RecordingSink::new(SinkReply::Created);
        let server = server(Some(sink.clone()));

        let response = server
            .post("/api/book-demo")
            .text(r#"{"name":"Jane Doe","email":"jane@co.coop"}"#)
            .await;

        response.assert_status_ok();
        assert_eq!(sink.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_required_fields_returns_400_without_outbound_call() {
        let sink = RecordingSink::new(SinkReply::Created);
        let server = server(Some(sink.clone()));

        for body in [
            json!({ "name": "", "email": "jane@co.coop" }),
            json!({ "name": "Jane Doe", "email": "   " }),
            json!({ "email": "jane@co.coop" }),
            json!({}),
        ] {
            let response = server.post("/api/book-demo").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "Name and email are required." }));
        }

        assert_eq!(sink.calls(), 0);
    }

    /// Gateway whose sink is wired only when the CRM settings are complete
    fn server_from_parts(
        sink: &Arc<RecordingSink>,
        base_url: Option<&str>,
        api_key: Option<&str>,
        api_secret: Option<&str>,
    ) -> TestServer {
        let config = CrmConfig::from_parts(
            base_url.map(str::to_string),
            api_key.map(str::to_string),
            api_secret.map(str::to_string),
            Duration::from_secs(5),
        );
        server(config.map(|_| Arc::clone(sink)))
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_returns_503() {
        let sink = RecordingSink::new(SinkReply::Created);
        let url = Some("https://crm.example");

        for (base_url, api_key, api_secret) in [
            (None, Some("key1"), Some("secret1")),
            (url, None, Some("secret1")),
            (url, Some("key1"), None),
            (url, Some("key1"), Some("")),
        ] {
            let server = server_from_parts(&sink, base_url, api_key, api_secret);

            let response = server
                .post("/api/book-demo")
                .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
                .await;

            response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
            response.assert_json(&json!({ "error": "Booking service is currently unavailable." }));
        }
        assert_eq!(sink.calls(), 0);

        // Complete settings wire the same sink in
        server_from_parts(&sink, url, Some("key1"), Some("secret1"))
            .post("/api/book-demo")
            .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
            .await
            .assert_status_ok();
        assert_eq!(sink.calls(), 1);
    }

    #[tokio::test]
    async fn test_upstream_rejection_returns_generic_502() {
        let server = server(Some(RecordingSink::new(SinkReply::Rejected(
            500,
            "Internal error",
        ))));

        let response = server
            .post("/api/book-demo")
            .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Unable to create booking." }));
        assert!(!response.text().contains("Internal error"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_502() {
        let server = server(Some(RecordingSink::new(SinkReply::Unreachable)));

        let response = server
            .post("/api/book-demo")
            .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        response.assert_json(&json!({ "error": "Unable to reach booking service." }));
    }

    #[tokio::test]
    async fn test_upstream_timeout_returns_504() {
        let server = server(Some(RecordingSink::new(SinkReply::Timeout)));

        let response = server
            .post("/api/book-demo")
            .json(&json!({ "name": "Jane Doe", "email": "jane@co.coop" }))
            .await;

        response.assert_status(StatusCode::GATEWAY_TIMEOUT);
        response.assert_json(&json!({ "error": "Booking service took too long to respond." }));
    }

    #[tokio::test]
    async fn test_forwarded_payload_shape() {
        let sink = RecordingSink::new(SinkReply::Created);
        let server = server(Some(sink.clone()));

        server
            .post("/api/book-demo")
            .json(&json!({
                "name": " Jane Doe ",
                "email": "jane@co.coop",
                "organization": "Sunrise Coffee Cooperative",
                "phone": "",
                "preferredDate": "",
                "message": " Harvest intake "
            }))
            .await
            .assert_status_ok();

        let payloads = sink.payloads();
        assert_eq!(
            serde_json::to_value(&payloads[0]).unwrap(),
            json!({
                "lead_name": "Jane Doe",
                "email_id": "jane@co.coop",
                "company_name": "Sunrise Coffee Cooperative",
                "phone": "",
                "source": "Website",
                "status": "Lead",
                "notes": "Harvest intake"
            })
        );
    }
}
