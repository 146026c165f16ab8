use thiserror::Error;

use super::MAX_RECIPIENTS;

/// Reasons an outgoing mail request is rejected.
///
/// The display strings are returned to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailValidationError {
    #[error("\"to\" is required.")]
    MissingRecipients,

    #[error("Subject and either text or html are required.")]
    MissingContent,

    #[error("At least one recipient is required.")]
    EmptyRecipientList,

    #[error("Up to {MAX_RECIPIENTS} recipients are allowed per request.")]
    TooManyRecipients { count: usize },

    #[error("Invalid email: {address}")]
    InvalidAddress { address: String },

    #[error("Attachment is not valid base64.")]
    MalformedAttachment,

    #[error("Attachment is too large (> ~10MB).")]
    AttachmentTooLarge { size: usize },

    #[error("Unsupported attachment type: {}", mime_type.as_deref().unwrap_or("unknown"))]
    UnsupportedAttachmentType { mime_type: Option<String> },
}

impl MailValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingRecipients
            | Self::EmptyRecipientList
            | Self::TooManyRecipients { .. }
            | Self::InvalidAddress { .. } => "to",
            Self::MissingContent => "subject",
            Self::MalformedAttachment | Self::AttachmentTooLarge { .. } => "fileBase64",
            Self::UnsupportedAttachmentType { .. } => "mimeType",
        }
    }
}
