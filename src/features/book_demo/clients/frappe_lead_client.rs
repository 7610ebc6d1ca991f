use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use crate::core::config::CrmConfig;
use crate::features::book_demo::dtos::{CrmLeadEnvelope, CrmLeadPayload};

/// Failure modes of a single lead creation attempt
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("CRM rejected lead: HTTP {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("CRM request failed: {0}")]
    Unreachable(String),

    #[error("CRM request timed out after {0:?}")]
    Timeout(Duration),
}

/// Destination for validated leads
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Creates one lead. Called exactly once per submission, never retried.
    async fn create_lead(&self, payload: &CrmLeadPayload) -> Result<(), CrmError>;
}

/// Client for the Frappe REST API (`/api/resource/Lead`)
pub struct FrappeLeadClient {
    config: CrmConfig,
    http_client: reqwest::Client,
}

impl FrappeLeadClient {
    pub fn new(config: CrmConfig) -> reqwest::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl LeadSink for FrappeLeadClient {
    async fn create_lead(&self, payload: &CrmLeadPayload) -> Result<(), CrmError> {
        let url = self.config.lead_url();
        tracing::debug!("Creating Frappe lead at {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.config.authorization())
            .json(&CrmLeadEnvelope { data: payload })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CrmError::Timeout(self.config.timeout)
                } else {
                    CrmError::Unreachable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CrmError::Rejected { status, body });
        }

        Ok(())
    }
}
