//! Bearer credentials for Firestore calls.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::adapters::http::ensure_success;
use crate::config::FirebaseConfig;
use crate::errors::InfraError;

pub const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Tokens are refreshed this long before the server-reported expiry.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Token the Firestore emulator treats as an administrator.
const EMULATOR_OWNER_TOKEN: &str = "owner";

// =============================================================================
// AccessTokenSource
// =============================================================================

#[derive(Debug, Clone)]
pub enum AccessTokenSource {
    /// No `Authorization` header is sent.
    Anonymous,
    Static(Arc<str>),
    MetadataServer(MetadataTokenCache),
}

impl AccessTokenSource {
    /// Picks a source from configuration.
    ///
    /// An explicit token wins, then the metadata server, then the emulator
    /// owner token when an emulator is configured.
    #[must_use]
    pub fn from_config(client: reqwest::Client, config: &FirebaseConfig) -> Self {
        if let Some(token) = &config.access_token {
            Self::Static(Arc::from(token.as_str()))
        } else if config.use_metadata_server {
            Self::MetadataServer(MetadataTokenCache::new(client, METADATA_TOKEN_URL))
        } else if config.firestore_emulator_host.is_some() {
            Self::Static(Arc::from(EMULATOR_OWNER_TOKEN))
        } else {
            Self::Anonymous
        }
    }

    /// Current bearer token, if this source has one.
    ///
    /// # Errors
    ///
    /// Fails only when the metadata server cannot issue a token.
    pub async fn bearer(&self) -> Result<Option<String>, InfraError> {
        match self {
            Self::Anonymous => Ok(None),
            Self::Static(token) => Ok(Some(token.to_string())),
            Self::MetadataServer(cache) => cache.token().await.map(Some),
        }
    }
}

// =============================================================================
// MetadataTokenCache
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    refresh_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.refresh_at
    }
}

/// Service-account tokens from the GCP metadata server, shared by every
/// clone of the repository.
#[derive(Debug, Clone)]
pub struct MetadataTokenCache {
    client: reqwest::Client,
    endpoint: Arc<str>,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl MetadataTokenCache {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: Arc::from(endpoint),
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached token or fetches a new one.
    ///
    /// Concurrent callers that find the cache stale wait on the write lock,
    /// so only one of them reaches the metadata server.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures from the metadata server.
    pub async fn token(&self) -> Result<String, InfraError> {
        if let Some(cached) = self.cached.read().await.as_ref().filter(|token| token.is_fresh()) {
            return Ok(cached.value.clone());
        }

        let mut slot = self.cached.write().await;
        if let Some(cached) = slot.as_ref().filter(|token| token.is_fresh()) {
            return Ok(cached.value.clone());
        }

        let fetched = self.fetch().await?;
        let lifetime = Duration::from_secs(fetched.expires_in).saturating_sub(REFRESH_MARGIN);
        tracing::debug!(expires_in = fetched.expires_in, "Fetched metadata access token");

        *slot = Some(CachedToken {
            value: fetched.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(fetched.access_token)
    }

    async fn fetch(&self) -> Result<TokenResponse, InfraError> {
        let response = self
            .client
            .get(self.endpoint.as_ref())
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

// =============================================================================
// Tests
// =============================================================================
