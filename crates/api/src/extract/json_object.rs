use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::errors::ApiError;

/// Client-facing text for any body that is not a usable JSON object.
pub const NOT_A_JSON_OBJECT: &str = "Request body must be a JSON object.";

// =============================================================================
// JsonObject Extractor
// =============================================================================

/// JSON body that must be an object at the top level.
///
/// Serde maps a JSON array onto a struct positionally, so `Json<T>` alone
/// would accept `["a@example.com", "Hi"]` as a request. The body is read as
/// a map first and only then shaped into `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObject<T>(pub T);

impl<T, S> FromRequest<S> for JsonObject<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(object) = Json::<Map<String, JsonValue>>::from_request(request, state).await?;

        serde_json::from_value(JsonValue::Object(object))
            .map(Self)
            .map_err(|error| {
                tracing::debug!(reason = %error, "Rejected request body");
                ApiError::validation(NOT_A_JSON_OBJECT)
            })
    }
}

// =============================================================================
// Tests
// =============================================================================
