use carelink_domain::mail::MailDraft;

use crate::errors::{Service, WorkflowError};
use crate::ports::{MailSender, WorkflowResult};

// =============================================================================
// SendMail Workflow
// =============================================================================

/// Validates a draft and hands it to the mail provider.
///
/// Configuration is checked before the input so that a misconfigured
/// deployment answers the same way for every request.
///
/// # Errors
///
/// - [`WorkflowError::NotConfigured`] when the provider is not configured
/// - [`WorkflowError::Domain`] when the draft is rejected
/// - [`WorkflowError::Upstream`] when the provider call fails
pub async fn send_mail<M: MailSender>(mailer: &M, draft: MailDraft) -> WorkflowResult<()> {
    if !mailer.is_configured() {
        return Err(WorkflowError::not_configured(
            Service::Mail,
            "SENDGRID_API_KEY or MAIL_SENDER",
        ));
    }

    let mail = draft.validate()?;

    tracing::info!(
        recipients = mail.recipients().len(),
        has_attachment = mail.attachment().is_some(),
        "Dispatching mail"
    );

    mailer.send(&mail).await
}

// =============================================================================
// Tests
// =============================================================================
