//! Firebase ID-token verification through Identity Toolkit `accounts:lookup`.
//!
//! A token the service refuses (HTTP 400, e.g. `INVALID_ID_TOKEN` or
//! `TOKEN_EXPIRED`) is an authentication failure; any other non-2xx reply
//! is an upstream failure.

use std::sync::Arc;

use carelink_domain::profile::UserId;
use carelink_workflow::ports::{IdentityVerifier, WorkflowResult};
use carelink_workflow::{Service, WorkflowError};
use serde::{Deserialize, Serialize};

use super::http::ensure_success;
use crate::config::FirebaseConfig;
use crate::errors::InfraError;

const IDENTITY_TOOLKIT_HOST: &str = "https://identitytoolkit.googleapis.com";
const LOOKUP_PATH: &str = "/v1/accounts:lookup";

/// The Auth emulator accepts any key.
const EMULATOR_API_KEY: &str = "emulator";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
}

// =============================================================================
// FirebaseIdentityVerifier
// =============================================================================

#[derive(Debug, Clone)]
pub struct FirebaseIdentityVerifier {
    client: reqwest::Client,
    api_key: Option<Arc<str>>,
    endpoint: Arc<str>,
}

impl FirebaseIdentityVerifier {
    /// Targets the Auth emulator when `FIREBASE_AUTH_EMULATOR_HOST` is set.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &FirebaseConfig) -> Self {
        match &config.auth_emulator_host {
            Some(host) => Self::with_endpoint(
                client,
                &format!("http://{host}/identitytoolkit.googleapis.com{LOOKUP_PATH}"),
                Some(config.web_api_key.as_deref().unwrap_or(EMULATOR_API_KEY)),
            ),
            None => Self::with_endpoint(
                client,
                &format!("{IDENTITY_TOOLKIT_HOST}{LOOKUP_PATH}"),
                config.web_api_key.as_deref(),
            ),
        }
    }

    #[must_use]
    pub fn with_endpoint(client: reqwest::Client, endpoint: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            api_key: api_key.map(Arc::from),
            endpoint: Arc::from(endpoint),
        }
    }

    async fn lookup(&self, api_key: &str, token: &str) -> Result<Option<UserId>, InfraError> {
        let response = self
            .client
            .post(self.endpoint.as_ref())
            .query(&[("key", api_key)])
            .json(&LookupRequest { id_token: token })
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let reason = response.text().await.unwrap_or_default();
            tracing::debug!(reason = %reason, "ID token rejected");
            return Ok(None);
        }

        let reply: LookupResponse = ensure_success(response).await?.json().await?;
        Ok(reply
            .users
            .into_iter()
            .next()
            .and_then(|user| UserId::new(user.local_id)))
    }
}

impl IdentityVerifier for FirebaseIdentityVerifier {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn verify(&self, token: &str) -> WorkflowResult<UserId> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| WorkflowError::not_configured(Service::Identity, "FIREBASE_WEB_API_KEY"))?;

        self.lookup(api_key, token)
            .await
            .map_err(|error| error.into_workflow(Service::Identity, "verify"))?
            .ok_or(WorkflowError::Unauthenticated)
    }
}

// =============================================================================
// Tests
// =============================================================================
