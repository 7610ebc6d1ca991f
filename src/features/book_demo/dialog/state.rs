use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle of one submission attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Values of the demo request form, posted verbatim to the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub phone: String,
    pub preferred_date: String,
    pub message: String,
}

impl FormState {
    /// Name and email are both non-blank
    pub fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn set(&mut self, field: FormField, value: String) {
        *self.slot(field) = value;
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Organization => &self.organization,
            FormField::Phone => &self.phone,
            FormField::PreferredDate => &self.preferred_date,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Organization => &mut self.organization,
            FormField::Phone => &mut self.phone,
            FormField::PreferredDate => &mut self.preferred_date,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Organization,
    Phone,
    PreferredDate,
    Message,
}

impl FormField {
    /// Input `name` attribute of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Organization => "organization",
            FormField::Phone => "phone",
            FormField::PreferredDate => "preferredDate",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "organization" => Ok(FormField::Organization),
            "phone" => Ok(FormField::Phone),
            "preferredDate" => Ok(FormField::PreferredDate),
            "message" => Ok(FormField::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Everything the dialog renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub is_open: bool,
    pub form: FormState,
    pub status: SubmitStatus,
    pub error: Option<String>,
}

impl DialogState {
    /// Blank form, idle, no error. Leaves `is_open` alone.
    pub(crate) fn reset(&mut self) {
        self.form = FormState::default();
        self.status = SubmitStatus::Idle;
        self.error = None;
    }
}
