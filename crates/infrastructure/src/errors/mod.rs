//! Infrastructure error types.
//!
//! # Error Categories
//!
//! - [`InfraError::Connection`]: the upstream could not be reached
//! - [`InfraError::Timeout`]: the upstream did not answer in time
//! - [`InfraError::Status`]: the upstream answered with a non-2xx status
//! - [`InfraError::Serialization`]: a payload could not be encoded or decoded
//! - [`InfraError::Configuration`]: invalid or missing settings
//!
//! # Examples
//!
//! ```
//! use carelink_infrastructure::errors::InfraError;
//!
//! let error = InfraError::status(401, r#"{"errors":[]}"#);
//! assert!(error.is_status());
//! assert_eq!(error.to_string(), "Upstream answered HTTP 401");
//! ```

use carelink_workflow::{Service, WorkflowError};
use thiserror::Error;

// =============================================================================
// InfraError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfraError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Operation timed out: {message}")]
    Timeout { message: String },

    /// Non-2xx reply. The body is kept for logging only.
    #[error("Upstream answered HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl InfraError {
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl InfraError {
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Status code of a [`InfraError::Status`] reply.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Logs the failure with the upstream body and converts it for the
    /// workflow layer.
    pub fn into_workflow(self, service: Service, operation: &'static str) -> WorkflowError {
        match &self {
            Self::Status { status, body } => {
                tracing::error!(%service, operation, status, body = %body, "Upstream rejected request");
            }
            other => {
                tracing::error!(%service, operation, error = %other, "Upstream request failed");
            }
        }
        WorkflowError::upstream(service, operation, self.to_string())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<reqwest::Error> for InfraError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(error.to_string())
        } else if error.is_connect() {
            Self::connection(error.to_string())
        } else if error.is_decode() {
            Self::serialization(error.to_string())
        } else if let Some(status) = error.status() {
            Self::status(status.as_u16(), error.to_string())
        } else {
            Self::connection(error.to_string())
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON: {error}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
