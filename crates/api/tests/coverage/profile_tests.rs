use crate::helpers::{
    ALICE, ALICE_TOKEN, BOB, MockProfileRepository, TestContext, assert_error, assert_json_null,
    assert_json_string_eq, assert_ok_body, bearer,
};
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

const UNAUTHENTICATED: &str = "Missing or invalid bearer token.";

async fn update(context: &TestContext, body: &JsonValue) -> crate::helpers::TestResponse {
    context
        .client
        .post_json_with_headers(
            "/profile",
            body,
            &[("authorization", bearer(ALICE_TOKEN).as_str())],
        )
        .await
}

// =============================================================================
// Authentication
// =============================================================================

#[rstest]
#[case(&[])]
#[case(&[("authorization", "Bearer unknown-token")])]
#[case(&[("authorization", "Basic dXNlcjpwYXNz")])]
#[tokio::test]
async fn profile_requires_valid_token(#[case] headers: &[(&str, &str)]) {
    let context = TestContext::new();

    let read = context.client.get_with_headers("/profile", headers).await;
    let write = context
        .client
        .post_json_with_headers("/profile", &json!({"city": "Leeds"}), headers)
        .await;

    assert_error(&read, 401, UNAUTHENTICATED);
    assert_error(&write, 401, UNAUTHENTICATED);
    assert!(context.profiles.stored(ALICE).is_none());
}

#[rstest]
#[tokio::test]
async fn unconfigured_store_answers_500() {
    let context = TestContext::builder()
        .profiles(MockProfileRepository::unconfigured())
        .build();

    let response = update(&context, &json!({"city": "Leeds"})).await;

    assert_error(&response, 500, "Missing FIREBASE_PROJECT_ID");
}

// =============================================================================
// Reading
// =============================================================================

#[rstest]
#[tokio::test]
async fn unsaved_profile_reads_as_empty() {
    let context = TestContext::new();

    let response = context
        .client
        .get_with_headers("/profile", &[("authorization", bearer(ALICE_TOKEN).as_str())])
        .await;

    assert_eq!(response.status_code(), 200);
    assert_ok_body(&response);
    let profile = &response.body["profile"];
    assert_json_string_eq(profile, "uid", ALICE);
    assert_json_null(profile, "username");
    assert_json_null(profile, "updatedAt");
}

// =============================================================================
// Updating
// =============================================================================

#[rstest]
#[tokio::test]
async fn first_update_creates_profile() {
    let context = TestContext::new();

    let response = update(
        &context,
        &json!({
            "username": "  QuietRiver ",
            "country": "United Kingdom",
            "city": "Leeds",
            "age": "25-34",
            "interest": "mental-health"
        }),
    )
    .await;

    assert_eq!(response.status_code(), 200);
    let profile = &response.body["profile"];
    assert_json_string_eq(profile, "uid", ALICE);
    assert_json_string_eq(profile, "username", "QuietRiver");
    assert_json_string_eq(profile, "city", "Leeds");
    assert_json_string_eq(profile, "age", "25-34");
    assert_json_string_eq(profile, "interest", "mental-health");
    assert_json_string_eq(profile, "updatedAt", "2025-03-14T09:26:53Z");

    let stored = context.profiles.stored(ALICE).expect("profile saved");
    assert_eq!(stored.city.as_deref(), Some("Leeds"));
}

#[rstest]
#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let context = TestContext::new();
    update(&context, &json!({"username": "QuietRiver", "city": "Leeds"})).await;

    let response = update(&context, &json!({"country": "Ireland", "city": ""})).await;

    assert_eq!(response.status_code(), 200);
    let profile = &response.body["profile"];
    assert_json_string_eq(profile, "username", "QuietRiver");
    assert_json_string_eq(profile, "country", "Ireland");
    assert_json_null(profile, "city");
}

#[rstest]
#[tokio::test]
async fn username_held_by_someone_else_is_rejected() {
    let context = TestContext::builder()
        .profiles(MockProfileRepository::new().with_username(BOB, "QuietRiver"))
        .build();

    let response = update(&context, &json!({"username": "quietriver"})).await;

    assert_error(&response, 400, "Username is already taken.");
    assert!(context.profiles.stored(ALICE).is_none());
}

#[rstest]
#[tokio::test]
async fn own_username_can_be_resubmitted() {
    let context = TestContext::builder()
        .profiles(MockProfileRepository::new().with_username(ALICE, "QuietRiver"))
        .build();

    let response = update(&context, &json!({"username": "QUIETRIVER"})).await;

    assert_eq!(response.status_code(), 200);
    assert_json_string_eq(&response.body["profile"], "username", "QUIETRIVER");
}

#[rstest]
#[case(json!({}), "No profile fields to update.")]
#[case(json!({"username": "ab"}), "Username must be at least 3 characters.")]
#[case(json!({"username": ""}), "Username must be at least 3 characters.")]
#[case(json!({"age": "17"}), "Invalid age: 17")]
#[case(json!({"interest": "knitting"}), "Invalid interest: knitting")]
#[tokio::test]
async fn invalid_update_is_rejected(#[case] body: JsonValue, #[case] message: &str) {
    let context = TestContext::new();

    let response = update(&context, &body).await;

    assert_error(&response, 400, message);
}

#[rstest]
#[tokio::test]
async fn malformed_body_is_rejected() {
    let context = TestContext::new();

    let response = context
        .client
        .send(
            axum::http::Method::POST,
            "/profile",
            &[
                ("content-type", "application/json"),
                ("authorization", bearer(ALICE_TOKEN).as_str()),
            ],
            axum::body::Body::from("{\"city\":"),
        )
        .await;

    assert_error(&response, 400, "Request body must be a JSON object.");
}

#[rstest]
#[case(json!(["Hijacked"]))]
#[case(json!([]))]
#[case(json!("Hijacked"))]
#[tokio::test]
async fn non_object_body_is_rejected_without_saving(#[case] body: JsonValue) {
    let context = TestContext::new();

    let response = update(&context, &body).await;

    assert_error(&response, 400, "Request body must be a JSON object.");
    assert!(context.profiles.stored(ALICE).is_none());
}
