//! Response DTOs.
//!
//! Every JSON body produced by this service carries `ok`; provider replies
//! passed through from the maps service are the exception.

use carelink_domain::profile::UserProfile;
use carelink_workflow::workflows::UsernameAvailability;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Envelope Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    #[must_use]
    pub const fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    /// Request field a validation failure points at, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

// =============================================================================
// Profile Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub uid: String,
    pub username: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub age: Option<String>,
    pub interest: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserProfile> for ProfileBody {
    fn from(profile: UserProfile) -> Self {
        Self {
            uid: profile.user_id.as_str().to_string(),
            username: profile.username.map(|username| username.value().to_string()),
            country: profile.country,
            city: profile.city,
            age: profile.age.map(|age| age.as_str().to_string()),
            interest: profile.interest.map(|interest| interest.as_str().to_string()),
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub ok: bool,
    pub profile: ProfileBody,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            ok: true,
            profile: profile.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameAvailabilityResponse {
    pub ok: bool,
    pub username: String,
    pub available: bool,
}

impl From<UsernameAvailability> for UsernameAvailabilityResponse {
    fn from(availability: UsernameAvailability) -> Self {
        Self {
            ok: true,
            username: availability.username.value().to_string(),
            available: availability.available,
        }
    }
}

// =============================================================================
// Health Responses
// =============================================================================

/// Which upstream services have their credentials configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesResponse {
    pub mail: bool,
    pub maps: bool,
    pub profiles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub services: ServicesResponse,
}

// =============================================================================
// Tests
// =============================================================================
