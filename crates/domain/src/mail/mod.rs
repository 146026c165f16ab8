//! Outgoing mail domain.
//!
//! - [`RecipientList`]: comma-separated recipients, at most five
//! - [`Attachment`]: one optional base64 attachment with size/type limits
//! - [`MailDraft`]: unvalidated request input, validated into [`OutgoingMail`]

mod attachment;
mod errors;
mod message;
mod recipient;

pub use attachment::{ALLOWED_ATTACHMENT_TYPES, Attachment, MAX_ATTACHMENT_BYTES};
pub use errors::MailValidationError;
pub use message::{MailDraft, OutgoingMail};
pub use recipient::{EmailAddress, MAX_RECIPIENTS, RecipientList, RecipientsInput};
