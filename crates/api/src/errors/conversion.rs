//! Conversions from domain, workflow and extractor errors to [`ApiError`].
//!
//! Upstream failures never leak provider details to the client. The adapter
//! that saw the failure logs it with the provider's body; here it only
//! becomes a fixed message for the endpoint.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use carelink_domain::common::DomainError;
use carelink_workflow::errors::WorkflowError;

use super::api_error::ApiError;
use crate::extract::NOT_A_JSON_OBJECT;

// =============================================================================
// FailureMessage
// =============================================================================

/// Client-facing text for an upstream failure, per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMessage {
    SendMail,
    UpdateProfile,
    LoadProfile,
    CheckUsername,
    Maps,
}

impl FailureMessage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendMail => "Failed to send email.",
            Self::UpdateProfile => "Failed to update profile.",
            Self::LoadProfile => "Failed to load profile.",
            Self::CheckUsername => "Failed to check username.",
            Self::Maps => "Failed to reach mapping service.",
        }
    }
}

// =============================================================================
// WorkflowError
// =============================================================================

impl ApiError {
    /// Maps a workflow failure, using `failure` for upstream errors.
    pub fn from_workflow(error: WorkflowError, failure: FailureMessage) -> Self {
        match error {
            WorkflowError::Domain(domain_error) => domain_error.into(),
            WorkflowError::Unauthenticated => Self::Unauthenticated,
            WorkflowError::NotConfigured { service, missing } => {
                tracing::error!(%service, missing, "Service is not configured");
                Self::internal(format!("Missing {missing}"))
            }
            WorkflowError::Upstream { .. } => Self::internal(failure.as_str()),
        }
    }
}

// =============================================================================
// From<DomainError> for ApiError
// =============================================================================

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::Validation {
            message: error.message(),
            field: Some(error.field()),
        }
    }
}

// =============================================================================
// From<JsonRejection> for ApiError
// =============================================================================

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        Self::validation(NOT_A_JSON_OBJECT)
    }
}

// =============================================================================
// From<QueryRejection> for ApiError
// =============================================================================

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected query string");
        Self::validation("Query string is malformed.")
    }
}

// =============================================================================
// Tests
// =============================================================================
