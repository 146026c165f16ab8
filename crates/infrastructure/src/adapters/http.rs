//! Shared reqwest plumbing for the outbound adapters.

use std::time::Duration;

use carelink_workflow::ports::UpstreamReply;
use serde_json::Value as JsonValue;

use crate::errors::InfraError;

/// Builds a pooled client with a whole-request timeout.
///
/// # Errors
///
/// Returns `InfraError::Configuration` if the TLS backend cannot start.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, InfraError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|error| InfraError::configuration(format!("HTTP client: {error}")))
}

/// Fails with `InfraError::Status` on a non-2xx reply, keeping the body.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, InfraError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(InfraError::status(status.as_u16(), body))
}

/// Captures status and body of any reply.
///
/// A body that is not JSON is kept as a JSON string.
pub async fn read_reply(response: reqwest::Response) -> Result<UpstreamReply, InfraError> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    Ok(UpstreamReply::new(status, parse_body(&text)))
}

pub(crate) fn parse_body(text: &str) -> JsonValue {
    if text.trim().is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_string()))
}
