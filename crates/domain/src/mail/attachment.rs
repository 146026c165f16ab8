//! Attachment validation.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::MailValidationError;

/// Largest decoded attachment accepted, in bytes.
pub const MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;

/// Non-image MIME types accepted as attachments. Any `image/*` is accepted too.
pub const ALLOWED_ATTACHMENT_TYPES: [&str; 5] = [
    "application/pdf",
    "text/plain",
    "text/markdown",
    "application/json",
    "text/x-log",
];

const DEFAULT_FILE_NAME: &str = "attachment";

// Browsers do not always pad FileReader output.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A validated attachment, still in its base64 transport form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    content: String,
    file_name: String,
    mime_type: String,
    size: usize,
}

impl Attachment {
    /// Validates a base64 attachment.
    ///
    /// The size limit is checked before the type, and both are checked
    /// against the decoded payload rather than the encoded text.
    ///
    /// # Errors
    ///
    /// - [`MailValidationError::MalformedAttachment`] if `content` is not base64
    /// - [`MailValidationError::AttachmentTooLarge`] above [`MAX_ATTACHMENT_BYTES`]
    /// - [`MailValidationError::UnsupportedAttachmentType`] for a missing or
    ///   disallowed MIME type
    pub fn from_base64(
        content: impl Into<String>,
        file_name: Option<&str>,
        mime_type: Option<&str>,
    ) -> Result<Self, MailValidationError> {
        let content = content.into();
        let size = decoded_len(&content)?;

        if size > MAX_ATTACHMENT_BYTES {
            return Err(MailValidationError::AttachmentTooLarge { size });
        }

        let mime_type = match mime_type.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) if is_allowed_type(value) => value.to_string(),
            other => {
                return Err(MailValidationError::UnsupportedAttachmentType {
                    mime_type: other.map(ToString::to_string),
                });
            }
        };

        let file_name = file_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        Ok(Self {
            content,
            file_name,
            mime_type,
            size,
        })
    }

    /// The base64 payload exactly as received.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Decoded size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

fn is_allowed_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || ALLOWED_ATTACHMENT_TYPES.contains(&mime_type)
}

fn decoded_len(content: &str) -> Result<usize, MailValidationError> {
    let compact: String = content
        .chars()
        .filter(|character| !character.is_ascii_whitespace())
        .collect();

    LENIENT_BASE64
        .decode(compact)
        .map(|bytes| bytes.len())
        .map_err(|_| MailValidationError::MalformedAttachment)
}

// =============================================================================
// Tests
// =============================================================================
