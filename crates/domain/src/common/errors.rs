//! Domain-level error aggregation.
//!
//! Each subdomain owns a `thiserror` enum describing its validation
//! failures. [`DomainError`] wraps them so that outer layers can handle
//! any rejected input uniformly.

use thiserror::Error;

use crate::mail::MailValidationError;
use crate::places::PlacesValidationError;
use crate::profile::ProfileValidationError;

// =============================================================================
// DomainError
// =============================================================================

/// Unified error type for the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Outgoing mail input was rejected.
    #[error(transparent)]
    Mail(#[from] MailValidationError),

    /// Profile input was rejected.
    #[error(transparent)]
    Profile(#[from] ProfileValidationError),

    /// Place lookup input was rejected.
    #[error(transparent)]
    Places(#[from] PlacesValidationError),
}

impl DomainError {
    /// Returns the name of the request field that caused the error.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Mail(error) => error.field(),
            Self::Profile(error) => error.field(),
            Self::Places(error) => error.field(),
        }
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
