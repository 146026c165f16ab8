//! Upstream settings read from the environment.
//!
//! Secrets are optional: a missing key leaves the matching adapter
//! unconfigured and the endpoint that needs it answers 500, while the rest
//! of the server keeps working. Only malformed values are errors.

use std::time::Duration;

use crate::errors::InfraError;

pub const DEFAULT_SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// MailConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: Option<String>,
    /// Verified sender address used as `from`.
    pub sender: Option<String>,
    pub base_url: String,
}

// =============================================================================
// MapsConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

// =============================================================================
// FirebaseConfig
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub project_id: Option<String>,
    /// Key for Identity Toolkit calls.
    pub web_api_key: Option<String>,
    /// `host:port` of a local Firestore emulator.
    pub firestore_emulator_host: Option<String>,
    /// `host:port` of a local Auth emulator.
    pub auth_emulator_host: Option<String>,
    pub access_token: Option<String>,
    pub use_metadata_server: bool,
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub maps: MapsConfig,
    pub firebase: FirebaseConfig,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `InfraError::Configuration` for a malformed number or flag.
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `InfraError::Configuration` for a malformed number or flag.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let upstream_timeout = match value("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|seconds| *seconds > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    InfraError::configuration(format!(
                        "UPSTREAM_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let use_metadata_server = match value("FIRESTORE_USE_METADATA_SERVER") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                InfraError::configuration(format!(
                    "FIRESTORE_USE_METADATA_SERVER must be true or false, got '{raw}'"
                ))
            })?,
            None => false,
        };

        Ok(Self {
            mail: MailConfig {
                api_key: value("SENDGRID_API_KEY"),
                sender: value("MAIL_SENDER"),
                base_url: base_url(value("SENDGRID_BASE_URL"), DEFAULT_SENDGRID_BASE_URL),
            },
            maps: MapsConfig {
                api_key: value("GOOGLE_MAPS_API_KEY"),
                base_url: base_url(value("GOOGLE_MAPS_BASE_URL"), DEFAULT_GOOGLE_MAPS_BASE_URL),
            },
            firebase: FirebaseConfig {
                project_id: value("FIREBASE_PROJECT_ID"),
                web_api_key: value("FIREBASE_WEB_API_KEY"),
                firestore_emulator_host: value("FIRESTORE_EMULATOR_HOST"),
                auth_emulator_host: value("FIREBASE_AUTH_EMULATOR_HOST"),
                access_token: value("FIRESTORE_ACCESS_TOKEN"),
                use_metadata_server,
            },
            upstream_timeout,
        })
    }
}

fn base_url(configured: Option<String>, default: &str) -> String {
    configured
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
