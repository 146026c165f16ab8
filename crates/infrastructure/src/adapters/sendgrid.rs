//! SendGrid v3 mail delivery.
//!
//! Every recipient shares a single personalization, so each one sees the
//! full `to` list. Bodies are sent text first, then HTML.

use std::sync::Arc;

use carelink_domain::mail::OutgoingMail;
use carelink_workflow::ports::{MailSender, WorkflowResult};
use carelink_workflow::{Service, WorkflowError};
use serde::Serialize;

use super::http::ensure_success;
use crate::config::MailConfig;
use crate::errors::InfraError;

// =============================================================================
// Payload
// =============================================================================

#[derive(Debug, Serialize)]
pub struct MailPayload<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct AttachmentPayload<'a> {
    content: &'a str,
    filename: &'a str,
    #[serde(rename = "type")]
    mime_type: &'a str,
    disposition: &'static str,
}

impl<'a> MailPayload<'a> {
    #[must_use]
    pub fn new(mail: &'a OutgoingMail, sender: &'a str) -> Self {
        let recipients = mail
            .recipients()
            .addresses()
            .iter()
            .map(|address| Address {
                email: address.as_str(),
            })
            .collect();

        let content = [("text/plain", mail.text()), ("text/html", mail.html())]
            .into_iter()
            .filter_map(|(content_type, value)| {
                value.map(|value| Content {
                    content_type,
                    value,
                })
            })
            .collect();

        let attachments = mail
            .attachment()
            .map(|attachment| AttachmentPayload {
                content: attachment.content(),
                filename: attachment.file_name(),
                mime_type: attachment.mime_type(),
                disposition: "attachment",
            })
            .into_iter()
            .collect();

        Self {
            personalizations: [Personalization { to: recipients }],
            from: Address { email: sender },
            subject: mail.subject(),
            content,
            attachments,
        }
    }
}

// =============================================================================
// SendGridMailSender
// =============================================================================

#[derive(Debug)]
struct Credentials {
    api_key: String,
    sender: String,
}

#[derive(Debug, Clone)]
pub struct SendGridMailSender {
    client: reqwest::Client,
    credentials: Option<Arc<Credentials>>,
    endpoint: Arc<str>,
}

impl SendGridMailSender {
    /// Both the API key and the sender must be present for the sender to
    /// count as configured.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &MailConfig) -> Self {
        let credentials = config
            .api_key
            .clone()
            .zip(config.sender.clone())
            .map(|(api_key, sender)| Arc::new(Credentials { api_key, sender }));

        Self {
            client,
            credentials,
            endpoint: format!("{}/v3/mail/send", config.base_url).into(),
        }
    }

    async fn post(&self, mail: &OutgoingMail, credentials: &Credentials) -> Result<(), InfraError> {
        let response = self
            .client
            .post(self.endpoint.as_ref())
            .bearer_auth(&credentials.api_key)
            .json(&MailPayload::new(mail, &credentials.sender))
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }
}

impl MailSender for SendGridMailSender {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn send(&self, mail: &OutgoingMail) -> WorkflowResult<()> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            WorkflowError::not_configured(Service::Mail, "SENDGRID_API_KEY or MAIL_SENDER")
        })?;

        self.post(mail, credentials)
            .await
            .map_err(|error| error.into_workflow(Service::Mail, "send"))
    }
}

// =============================================================================
// Tests
// =============================================================================
