pub mod frappe_lead_client;

pub use frappe_lead_client::{CrmError, FrappeLeadClient, LeadSink};
