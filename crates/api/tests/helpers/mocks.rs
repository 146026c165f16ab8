#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use carelink_domain::mail::OutgoingMail;
use carelink_domain::places::{DirectionsQuery, GeocodeQuery, PlaceCategory, PlaceQuery};
use carelink_domain::profile::{ProfilePatch, UserId, UserProfile, Username};
use carelink_workflow::ports::{
    Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository, UpstreamReply,
    WorkflowResult,
};
use carelink_workflow::{Service, WorkflowError};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

// =============================================================================
// MockMailSender
// =============================================================================

#[derive(Clone)]
pub struct MockMailSender {
    configured: bool,
    failing: bool,
    sent: Arc<RwLock<Vec<OutgoingMail>>>,
}

impl MockMailSender {
    fn build(configured: bool, failing: bool) -> Self {
        Self {
            configured,
            failing,
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn configured() -> Self {
        Self::build(true, false)
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self::build(false, false)
    }

    /// Configured, but every delivery is refused upstream.
    #[must_use]
    pub fn failing() -> Self {
        Self::build(true, true)
    }

    #[must_use]
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.read().unwrap().clone()
    }
}

impl MailSender for MockMailSender {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send(&self, mail: &OutgoingMail) -> WorkflowResult<()> {
        if self.failing {
            return Err(WorkflowError::upstream(
                Service::Mail,
                "send",
                "Upstream answered HTTP 401",
            ));
        }
        self.sent.write().unwrap().push(mail.clone());
        Ok(())
    }
}

// =============================================================================
// MockMapProvider
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Search {
        text: String,
        category: Option<PlaceCategory>,
    },
    Geocode {
        address: String,
    },
    Directions {
        origin: String,
        destination: String,
        mode: &'static str,
    },
}

#[derive(Clone)]
pub struct MockMapProvider {
    configured: bool,
    unreachable: bool,
    replies: Arc<RwLock<VecDeque<UpstreamReply>>>,
    calls: Arc<RwLock<Vec<MapCall>>>,
}

impl MockMapProvider {
    /// Answers with `replies` in order, then with an empty result set.
    #[must_use]
    pub fn with_replies(replies: Vec<UpstreamReply>) -> Self {
        Self {
            configured: true,
            unreachable: false,
            replies: Arc::new(RwLock::new(replies.into())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::with_replies(Vec::new())
        }
    }

    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::with_replies(Vec::new())
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.read().unwrap().clone()
    }

    fn answer(&self, call: MapCall) -> WorkflowResult<UpstreamReply> {
        self.calls.write().unwrap().push(call);
        if self.unreachable {
            return Err(WorkflowError::upstream(
                Service::Maps,
                "search",
                "Connection refused",
            ));
        }
        Ok(self
            .replies
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| UpstreamReply::new(200, json!({"results": [], "status": "ZERO_RESULTS"}))))
    }
}

impl MapProvider for MockMapProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search_places(
        &self,
        query: &PlaceQuery,
        category: Option<PlaceCategory>,
    ) -> WorkflowResult<UpstreamReply> {
        self.answer(MapCall::Search {
            text: query.text().to_string(),
            category,
        })
    }

    async fn geocode(&self, query: &GeocodeQuery) -> WorkflowResult<UpstreamReply> {
        self.answer(MapCall::Geocode {
            address: query.address().to_string(),
        })
    }

    async fn directions(&self, query: &DirectionsQuery) -> WorkflowResult<UpstreamReply> {
        self.answer(MapCall::Directions {
            origin: query.origin().to_string(),
            destination: query.destination().to_string(),
            mode: query.mode().as_str(),
        })
    }
}

// =============================================================================
// MockProfileRepository
// =============================================================================

#[derive(Clone)]
pub struct MockProfileRepository {
    configured: bool,
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl MockProfileRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            configured: true,
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_username(self, user_id: &str, username: &str) -> Self {
        let user_id = UserId::new(user_id).unwrap();
        let profile = UserProfile {
            username: Some(Username::new(username).unwrap()),
            ..UserProfile::empty(user_id.clone())
        };
        self.profiles.write().unwrap().insert(user_id, profile);
        self
    }

    #[must_use]
    pub fn stored(&self, user_id: &str) -> Option<UserProfile> {
        let user_id = UserId::new(user_id).unwrap();
        self.profiles.read().unwrap().get(&user_id).cloned()
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository for MockProfileRepository {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn find(&self, user_id: &UserId) -> WorkflowResult<Option<UserProfile>> {
        Ok(self.profiles.read().unwrap().get(user_id).cloned())
    }

    async fn find_owner_of_username(&self, canonical: &str) -> WorkflowResult<Option<UserId>> {
        Ok(self
            .profiles
            .read()
            .unwrap()
            .values()
            .find(|profile| {
                profile
                    .username
                    .as_ref()
                    .is_some_and(|username| username.canonical() == canonical)
            })
            .map(|profile| profile.user_id.clone()))
    }

    async fn save(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> WorkflowResult<UserProfile> {
        let mut profiles = self.profiles.write().unwrap();
        let current = profiles
            .remove(user_id)
            .unwrap_or_else(|| UserProfile::empty(user_id.clone()));
        let merged = current.merge(patch.clone(), updated_at);
        profiles.insert(user_id.clone(), merged.clone());
        Ok(merged)
    }
}

// =============================================================================
// MockIdentityVerifier
// =============================================================================

#[derive(Clone)]
pub struct MockIdentityVerifier {
    configured: bool,
    tokens: Arc<HashMap<String, UserId>>,
}

impl MockIdentityVerifier {
    #[must_use]
    pub fn new(tokens: &[(&str, &str)]) -> Self {
        let tokens = tokens
            .iter()
            .map(|(token, subject)| ((*token).to_string(), UserId::new(*subject).unwrap()))
            .collect();
        Self {
            configured: true,
            tokens: Arc::new(tokens),
        }
    }

    /// No web API key: every token check fails as not configured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(&[])
        }
    }
}

impl IdentityVerifier for MockIdentityVerifier {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn verify(&self, token: &str) -> WorkflowResult<UserId> {
        if !self.configured {
            return Err(WorkflowError::not_configured(
                Service::Identity,
                "FIREBASE_WEB_API_KEY",
            ));
        }
        self.tokens
            .get(token)
            .cloned()
            .ok_or(WorkflowError::Unauthenticated)
    }
}

// =============================================================================
// FixedClock
// =============================================================================

#[derive(Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(Self::instant())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
