use std::future::Future;

use carelink_domain::mail::OutgoingMail;
use carelink_domain::places::{DirectionsQuery, GeocodeQuery, PlaceCategory, PlaceQuery};
use carelink_domain::profile::{ProfilePatch, UserId, UserProfile};
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

// =============================================================================
// Type Aliases for Workflow Results
// =============================================================================

pub type WorkflowResult<T> = Result<T, crate::errors::WorkflowError>;

// =============================================================================
// UpstreamReply
// =============================================================================

/// Status and body of a provider response, kept for verbatim passthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: JsonValue,
}

impl UpstreamReply {
    #[must_use]
    pub const fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// True when the body holds a non-empty `results` array.
    #[must_use]
    pub fn has_results(&self) -> bool {
        self.body
            .get("results")
            .and_then(JsonValue::as_array)
            .is_some_and(|results| !results.is_empty())
    }
}

// =============================================================================
// MailSender
// =============================================================================

pub trait MailSender: Clone + Send + Sync + 'static {
    /// Whether the provider credentials and sender identity are present.
    fn is_configured(&self) -> bool;

    fn send(&self, mail: &OutgoingMail) -> impl Future<Output = WorkflowResult<()>> + Send;
}

// =============================================================================
// MapProvider
// =============================================================================

pub trait MapProvider: Clone + Send + Sync + 'static {
    fn is_configured(&self) -> bool;

    /// Text search, optionally filtered to a category.
    fn search_places(
        &self,
        query: &PlaceQuery,
        category: Option<PlaceCategory>,
    ) -> impl Future<Output = WorkflowResult<UpstreamReply>> + Send;

    fn geocode(
        &self,
        query: &GeocodeQuery,
    ) -> impl Future<Output = WorkflowResult<UpstreamReply>> + Send;

    fn directions(
        &self,
        query: &DirectionsQuery,
    ) -> impl Future<Output = WorkflowResult<UpstreamReply>> + Send;
}

// =============================================================================
// ProfileRepository
// =============================================================================

pub trait ProfileRepository: Clone + Send + Sync + 'static {
    fn is_configured(&self) -> bool;

    fn find(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = WorkflowResult<Option<UserProfile>>> + Send;

    /// Owner of the profile whose lowercase username equals `canonical`.
    fn find_owner_of_username(
        &self,
        canonical: &str,
    ) -> impl Future<Output = WorkflowResult<Option<UserId>>> + Send;

    /// Merges `patch` into the stored profile, creating it if absent, and
    /// returns the stored result.
    fn save(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = WorkflowResult<UserProfile>> + Send;
}

// =============================================================================
// IdentityVerifier
// =============================================================================

pub trait IdentityVerifier: Clone + Send + Sync + 'static {
    /// Whether the credentials needed to reach the identity service are set.
    fn is_configured(&self) -> bool;

    /// Resolves a bearer token to its subject.
    ///
    /// Fails with `Unauthenticated` for a rejected token.
    fn verify(&self, token: &str) -> impl Future<Output = WorkflowResult<UserId>> + Send;
}

// =============================================================================
// Clock
// =============================================================================

pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// Tests
// =============================================================================
