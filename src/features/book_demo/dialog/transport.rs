use async_trait::async_trait;

use crate::features::book_demo::dialog::FormState;
use crate::shared::constants::BOOK_DEMO_PATH;

/// Raw gateway answer; the body is interpreted by the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Booking request failed: {0}")]
    Network(String),
}

/// How the dialog reaches the booking gateway
#[async_trait]
pub trait BookingTransport: Send + Sync {
    async fn post_booking(&self, form: &FormState) -> Result<TransportResponse, TransportError>;
}

/// Posts the form as JSON to `{site_url}/api/book-demo`
pub struct HttpBookingTransport {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpBookingTransport {
    pub fn new(site_url: &str) -> Self {
        Self {
            endpoint: format!("{}{}", site_url.trim_end_matches('/'), BOOK_DEMO_PATH),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingTransport for HttpBookingTransport {
    async fn post_booking(&self, form: &FormState) -> Result<TransportResponse, TransportError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        // An unreadable body is treated like an empty one
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse { status, body })
    }
}
