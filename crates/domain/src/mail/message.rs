//! Mail drafts and validated outgoing mail.

use super::{Attachment, MailValidationError, RecipientList, RecipientsInput};

// =============================================================================
// MailDraft
// =============================================================================

/// Unvalidated mail request as received from a client.
///
/// Empty strings are treated the same as missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailDraft {
    pub to: Option<RecipientsInput>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub file_base64: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl MailDraft {
    /// Runs every check and produces a sendable message.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// recipient presence, subject/body presence, recipient list, attachment.
    ///
    /// # Errors
    ///
    /// Returns the first [`MailValidationError`] encountered.
    pub fn validate(self) -> Result<OutgoingMail, MailValidationError> {
        let to = self
            .to
            .filter(RecipientsInput::is_present)
            .ok_or(MailValidationError::MissingRecipients)?;

        let subject = present(self.subject);
        let text = present(self.text);
        let html = present(self.html);
        let Some(subject) = subject.filter(|_| text.is_some() || html.is_some()) else {
            return Err(MailValidationError::MissingContent);
        };

        let recipients = to.parse()?;

        let attachment = present(self.file_base64)
            .map(|content| {
                Attachment::from_base64(
                    content,
                    self.file_name.as_deref(),
                    self.mime_type.as_deref(),
                )
            })
            .transpose()?;

        Ok(OutgoingMail {
            recipients,
            subject,
            text,
            html,
            attachment,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

// =============================================================================
// OutgoingMail
// =============================================================================

/// A message that passed validation and can be handed to a mail provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    recipients: RecipientList,
    subject: String,
    text: Option<String>,
    html: Option<String>,
    attachment: Option<Attachment>,
}

impl OutgoingMail {
    #[must_use]
    pub const fn recipients(&self) -> &RecipientList {
        &self.recipients
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    #[must_use]
    pub const fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}

// =============================================================================
// Tests
// =============================================================================
