use axum::body::Body;
use axum::http::Method;
use crate::helpers::{TestContext, assert_error, assert_uuid_format};
use rstest::rstest;

// =============================================================================
// Unknown Routes and Methods
// =============================================================================

#[rstest]
#[case(Method::GET, "/sendMail")]
#[case(Method::PUT, "/sendMail")]
#[case(Method::POST, "/places/search")]
#[case(Method::DELETE, "/profile")]
#[case(Method::POST, "/checkUsername")]
#[case(Method::POST, "/health")]
#[tokio::test]
async fn wrong_method_answers_405(#[case] method: Method, #[case] path: &str) {
    let context = TestContext::new();

    let response = context.client.send(method, path, &[], Body::empty()).await;

    assert_error(&response, 405, "Method Not Allowed");
}

#[rstest]
#[case("/")]
#[case("/send-mail")]
#[case("/places")]
#[tokio::test]
async fn unknown_path_answers_404(#[case] path: &str) {
    let context = TestContext::new();

    let response = context.client.get(path).await;

    assert_error(&response, 404, "Not Found");
}

// =============================================================================
// Request Id
// =============================================================================

#[rstest]
#[tokio::test]
async fn every_response_carries_request_id() {
    let context = TestContext::new();

    let response = context.client.get("/health").await;

    let request_id = response.header("x-request-id").expect("request id header");
    assert_uuid_format(request_id);
}

#[rstest]
#[tokio::test]
async fn caller_request_id_is_echoed_on_errors() {
    let context = TestContext::new();

    let response = context
        .client
        .get_with_headers("/missing", &[("x-request-id", "trace-42")])
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.header("x-request-id"), Some("trace-42"));
}
