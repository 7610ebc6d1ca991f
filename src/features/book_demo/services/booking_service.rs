use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::book_demo::clients::{CrmError, LeadSink};
use crate::features::book_demo::dtos::{BookDemoRequest, LeadSubmission};

/// Validates demo requests and forwards them to the CRM
pub struct BookingService {
    lead_sink: Option<Arc<dyn LeadSink>>,
}

impl BookingService {
    /// `lead_sink` is `None` when the CRM integration is not configured;
    /// every valid submission is then refused with `ServiceUnavailable`.
    pub fn new(lead_sink: Option<Arc<dyn LeadSink>>) -> Self {
        Self { lead_sink }
    }

    pub fn is_configured(&self) -> bool {
        self.lead_sink.is_some()
    }

    /// Submit one demo request. Makes at most one outbound call.
    pub async fn submit(&self, request: BookDemoRequest) -> Result<()> {
        let submission = LeadSubmission::from(request);
        submission
            .validate()
            .map_err(|_| AppError::MissingRequiredFields)?;

        let Some(lead_sink) = self.lead_sink.as_ref() else {
            tracing::error!("Frappe booking integration is not configured");
            return Err(AppError::ServiceUnavailable);
        };

        let email = submission.email.clone();
        let payload = submission.into_crm_payload();

        lead_sink.create_lead(&payload).await.map_err(|e| {
            match e {
                CrmError::Rejected { status, ref body } => {
                    tracing::error!("Frappe booking failed: status={}, body={}", status, body);
                    AppError::UpstreamRejected
                }
                CrmError::Unreachable(ref reason) => {
                    tracing::error!("Frappe booking request failed: {}", reason);
                    AppError::UpstreamUnreachable
                }
                CrmError::Timeout(after) => {
                    tracing::error!("Frappe booking request timed out after {:?}", after);
                    AppError::UpstreamTimeout
                }
            }
        })?;

        tracing::info!("Demo lead created: email={}", email);

        Ok(())
    }
}
