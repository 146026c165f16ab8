use crate::helpers::{
    ALICE, ALICE_TOKEN, BOB_TOKEN, MockProfileRepository, TestContext, assert_error, bearer,
};
use rstest::rstest;
use serde_json::json;

fn context_with_taken_name() -> TestContext {
    TestContext::builder()
        .profiles(MockProfileRepository::new().with_username(ALICE, "QuietRiver"))
        .build()
}

#[rstest]
#[tokio::test]
async fn free_name_is_available() {
    let context = context_with_taken_name();

    let response = context.client.get("/checkUsername?username=%20BrightMeadow%20").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.body,
        json!({"ok": true, "username": "BrightMeadow", "available": true})
    );
}

#[rstest]
#[case(None)]
#[case(Some(BOB_TOKEN))]
#[tokio::test]
async fn taken_name_is_unavailable_to_others(#[case] token: Option<&str>) {
    let context = context_with_taken_name();
    let authorization = token.map(bearer);
    let headers: Vec<(&str, &str)> = authorization
        .as_deref()
        .map(|value| vec![("authorization", value)])
        .unwrap_or_default();

    let response = context
        .client
        .get_with_headers("/checkUsername?username=quietriver", &headers)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body["available"], false);
}

#[rstest]
#[tokio::test]
async fn own_name_counts_as_available() {
    let context = context_with_taken_name();

    let response = context
        .client
        .get_with_headers(
            "/checkUsername?username=QuietRiver",
            &[("authorization", bearer(ALICE_TOKEN).as_str())],
        )
        .await;

    assert_eq!(response.body["available"], true);
}

#[rstest]
#[tokio::test]
async fn rejected_token_fails_the_check() {
    let context = context_with_taken_name();

    let response = context
        .client
        .get_with_headers(
            "/checkUsername?username=QuietRiver",
            &[("authorization", "Bearer forged")],
        )
        .await;

    assert_error(&response, 401, "Missing or invalid bearer token.");
}

#[rstest]
#[case("/checkUsername", "Username is required.")]
#[case("/checkUsername?username=%20", "Username is required.")]
#[case("/checkUsername?username=ab", "Username must be at least 3 characters.")]
#[tokio::test]
async fn invalid_name_is_rejected(#[case] path: &str, #[case] message: &str) {
    let context = TestContext::new();

    let response = context.client.get(path).await;

    assert_error(&response, 400, message);
}
