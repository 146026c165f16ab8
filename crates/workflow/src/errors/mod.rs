//! Error types for the workflow layer.
//!
//! # Error Categories
//!
//! - [`WorkflowError::Domain`]: rejected input (wraps domain errors)
//! - [`WorkflowError::Unauthenticated`]: missing or invalid identity token
//! - [`WorkflowError::NotConfigured`]: a required secret is absent
//! - [`WorkflowError::Upstream`]: a third-party service call failed
//!
//! # Examples
//!
//! ```
//! use carelink_workflow::errors::{Service, WorkflowError};
//!
//! let error = WorkflowError::upstream(Service::Mail, "send", "HTTP 401");
//! assert!(error.is_upstream());
//! ```

use std::fmt;

use carelink_domain::common::DomainError;
use carelink_domain::mail::MailValidationError;
use carelink_domain::places::PlacesValidationError;
use carelink_domain::profile::ProfileValidationError;
use thiserror::Error;

// =============================================================================
// Service
// =============================================================================

/// Third-party service behind a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Mail,
    Maps,
    Profiles,
    Identity,
}

impl fmt::Display for Service {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mail => "mail",
            Self::Maps => "maps",
            Self::Profiles => "profiles",
            Self::Identity => "identity",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// WorkflowError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Missing or invalid bearer token.")]
    Unauthenticated,

    #[error("Missing {missing}")]
    NotConfigured {
        service: Service,
        missing: &'static str,
    },

    #[error("{service} {operation} failed: {message}")]
    Upstream {
        service: Service,
        operation: &'static str,
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn not_configured(service: Service, missing: &'static str) -> Self {
        Self::NotConfigured { service, missing }
    }

    #[must_use]
    pub fn upstream(service: Service, operation: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            operation,
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    #[must_use]
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }

    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<MailValidationError> for WorkflowError {
    fn from(error: MailValidationError) -> Self {
        Self::Domain(error.into())
    }
}

impl From<ProfileValidationError> for WorkflowError {
    fn from(error: ProfileValidationError) -> Self {
        Self::Domain(error.into())
    }
}

impl From<PlacesValidationError> for WorkflowError {
    fn from(error: PlacesValidationError) -> Self {
        Self::Domain(error.into())
    }
}

// =============================================================================
// Tests
// =============================================================================
