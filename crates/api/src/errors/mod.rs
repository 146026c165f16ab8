//! API error handling and response conversion.
//!
//! - [`ApiError`]: the error type returned by handlers
//! - [`conversion`]: mapping from domain and workflow errors

pub mod api_error;
pub mod conversion;

pub use api_error::ApiError;
pub use conversion::FailureMessage;
