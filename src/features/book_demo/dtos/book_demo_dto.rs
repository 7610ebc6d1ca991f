use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::constants::{LEAD_SOURCE, LEAD_STATUS};

/// Demo request as posted by the booking dialog
///
/// Every field is optional on the wire; required fields are checked after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDemoRequest {
    /// Full name of the contact (required)
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    /// Work email of the contact (required)
    #[schema(example = "jane@co.coop")]
    pub email: Option<String>,

    #[schema(example = "Sunrise Coffee Cooperative")]
    pub organization: Option<String>,

    /// Phone or WhatsApp number
    pub phone: Option<String>,

    /// Preferred demo date, passed to the CRM as given (e.g. `2026-11-02`)
    pub preferred_date: Option<String>,

    /// What the demo should focus on
    pub message: Option<String>,
}

/// Trimmed, validated form of a [`BookDemoRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LeadSubmission {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub organization: Option<String>,
    pub phone: Option<String>,

    /// `None` unless non-empty after trimming
    pub preferred_date: Option<String>,

    /// `None` unless non-empty after trimming
    pub message: Option<String>,
}

impl From<BookDemoRequest> for LeadSubmission {
    fn from(request: BookDemoRequest) -> Self {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());
        let non_empty = |value: Option<String>| trimmed(value).filter(|v| !v.is_empty());

        Self {
            name: trimmed(request.name).unwrap_or_default(),
            email: trimmed(request.email).unwrap_or_default(),
            organization: trimmed(request.organization),
            phone: trimmed(request.phone),
            preferred_date: non_empty(request.preferred_date),
            message: non_empty(request.message),
        }
    }
}

impl LeadSubmission {
    /// Maps the submission onto the Frappe `Lead` doctype
    pub fn into_crm_payload(self) -> CrmLeadPayload {
        CrmLeadPayload {
            lead_name: self.name,
            email_id: self.email,
            company_name: self.organization,
            phone: self.phone,
            source: LEAD_SOURCE.to_string(),
            status: LEAD_STATUS.to_string(),
            contact_date: self.preferred_date,
            notes: self.message,
        }
    }
}

/// Lead document sent to the CRM.
///
/// Absent optional fields are omitted from the JSON, never sent as `null` or `""`.
/// `company_name` and `phone` are forwarded as received (possibly empty), while
/// `contact_date` and `notes` only appear when they carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmLeadPayload {
    pub lead_name: String,
    pub email_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub source: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Frappe REST envelope: `{ "data": { ... } }`
#[derive(Debug, Serialize)]
pub struct CrmLeadEnvelope<'a> {
    pub data: &'a CrmLeadPayload,
}
