// =============================================================================
// GATEWAY RESPONSES
// =============================================================================

pub const MSG_INVALID_PAYLOAD: &str = "Invalid JSON payload.";

pub const MSG_MISSING_REQUIRED_FIELDS: &str = "Name and email are required.";

pub const MSG_SERVICE_UNAVAILABLE: &str = "Booking service is currently unavailable.";

/// CRM answered with a non-success status
pub const MSG_UPSTREAM_REJECTED: &str = "Unable to create booking.";

/// CRM could not be reached at all
pub const MSG_UPSTREAM_UNREACHABLE: &str = "Unable to reach booking service.";

pub const MSG_UPSTREAM_TIMEOUT: &str = "Booking service took too long to respond.";

// =============================================================================
// DIALOG MESSAGES
// =============================================================================

pub const MSG_DIALOG_MISSING_CONTACT: &str =
    "Please add your name and email so we know how to reach you.";

pub const MSG_DIALOG_SUBMIT_FAILED: &str = "We could not submit your request. Please try again.";

pub const MSG_DIALOG_UNREACHABLE: &str =
    "We could not reach the booking service. Check your connection and try again.";

// =============================================================================
// CRM LEAD DEFAULTS
// =============================================================================

/// Value of the Lead `source` field for every website submission
pub const LEAD_SOURCE: &str = "Website";

/// Initial Lead `status`
pub const LEAD_STATUS: &str = "Lead";

/// Path of the gateway route, shared by the router and the dialog transport
pub const BOOK_DEMO_PATH: &str = "/api/book-demo";
