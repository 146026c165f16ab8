use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::dto::response::ErrorResponse;

// =============================================================================
// ApiError
// =============================================================================

/// Handler failure. The display text is the client-facing `error` message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    #[error("Missing or invalid bearer token.")]
    Unauthenticated,

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{message}")]
    Internal { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn validation_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let mut body = ErrorResponse::new(self.to_string());
        if let Self::Validation {
            field: Some(field), ..
        } = self
        {
            body = body.with_field(field);
        }
        (status_code, Json(body)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
