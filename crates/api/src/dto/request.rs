//! Request DTOs.
//!
//! Every field is optional at this layer so that a missing field surfaces as
//! the domain's own validation message instead of a deserialization error.

use carelink_domain::mail::{MailDraft, RecipientsInput};
use carelink_workflow::workflows::{CheckUsernameCommand, UpdateProfileCommand};
use serde::Deserialize;

// =============================================================================
// Mail
// =============================================================================

/// `to` as sent by clients: a comma-separated string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipientsField {
    Joined(String),
    List(Vec<String>),
}

impl From<RecipientsField> for RecipientsInput {
    fn from(field: RecipientsField) -> Self {
        match field {
            RecipientsField::Joined(joined) => Self::Joined(joined),
            RecipientsField::List(addresses) => Self::Listed(addresses),
        }
    }
}

/// Body of `POST /sendMail`.
///
/// ```json
/// {
///   "to": "ana@example.com, ben@example.org",
///   "subject": "Weekly check-in",
///   "text": "Hello",
///   "fileBase64": "aGVsbG8=",
///   "fileName": "notes.txt",
///   "mimeType": "text/plain"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    #[serde(default)]
    pub to: Option<RecipientsField>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub file_base64: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl From<SendMailRequest> for MailDraft {
    fn from(request: SendMailRequest) -> Self {
        Self {
            to: request.to.map(RecipientsInput::from),
            subject: request.subject,
            text: request.text,
            html: request.html,
            file_base64: request.file_base64,
            file_name: request.file_name,
            mime_type: request.mime_type,
        }
    }
}

// =============================================================================
// Places
// =============================================================================

/// Query of `GET /places/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceSearchParams {
    pub q: Option<String>,
    /// `lat,lng`
    pub near: Option<String>,
    /// Metres.
    pub radius: Option<String>,
}

/// Query of `GET /places/geocode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeocodeParams {
    pub address: Option<String>,
}

/// Query of `GET /places/directions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectionsParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub mode: Option<String>,
}

// =============================================================================
// Profile
// =============================================================================

/// Body of `POST /profile`. Absent fields are left untouched; blank ones
/// clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
}

impl UpdateProfileRequest {
    #[must_use]
    pub fn into_command(self, bearer_token: Option<String>) -> UpdateProfileCommand {
        UpdateProfileCommand {
            bearer_token,
            username: self.username,
            country: self.country,
            city: self.city,
            age: self.age,
            interest: self.interest,
        }
    }
}

/// Query of `GET /checkUsername`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckUsernameParams {
    pub username: Option<String>,
}

impl CheckUsernameParams {
    #[must_use]
    pub fn into_command(self, bearer_token: Option<String>) -> CheckUsernameCommand {
        CheckUsernameCommand {
            bearer_token,
            username: self.username,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
