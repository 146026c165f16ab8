#![allow(dead_code)]

use serde_json::Value as JsonValue;

use super::TestResponse;

pub fn assert_ok_body(response: &TestResponse) {
    assert_eq!(
        response.body["ok"],
        JsonValue::Bool(true),
        "Expected ok:true, got {} {}",
        response.status,
        response.body
    );
}

/// Status plus the `{ok:false, error}` envelope with the exact message.
pub fn assert_error(response: &TestResponse, status: u16, message: &str) {
    assert_eq!(
        response.status_code(),
        status,
        "Unexpected status, body: {}",
        response.body
    );
    assert_eq!(response.body["ok"], JsonValue::Bool(false));
    assert_eq!(response.error_message(), message);
}

pub fn assert_json_string_eq(json: &JsonValue, key: &str, expected: &str) {
    let actual = json
        .get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or_else(|| panic!("Expected key '{key}' to be a string in {json}"));

    assert_eq!(actual, expected, "Expected '{key}' to be '{expected}'");
}

pub fn assert_json_null(json: &JsonValue, key: &str) {
    assert!(
        json.get(key).is_some_and(JsonValue::is_null),
        "Expected '{key}' to be null in {json}"
    );
}

pub fn assert_uuid_format(value: &str) {
    uuid::Uuid::parse_str(value)
        .unwrap_or_else(|_| panic!("Expected '{value}' to be a valid UUID"));
}
