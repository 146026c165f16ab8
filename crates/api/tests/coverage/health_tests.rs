use crate::helpers::{
    ALICE_TOKEN, MockIdentityVerifier, MockMailSender, MockMapProvider, MockProfileRepository,
    TestContext, assert_error, assert_ok_body, bearer,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn health_reports_version_and_services() {
    let context = TestContext::new();

    let response = context.client.get("/health").await;

    assert_eq!(response.status_code(), 200);
    assert_ok_body(&response);
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        response.body["services"],
        json!({"mail": true, "maps": true, "profiles": true})
    );
}

#[rstest]
#[tokio::test]
async fn health_stays_ok_when_services_are_unconfigured() {
    let context = TestContext::builder()
        .mailer(MockMailSender::unconfigured())
        .maps(MockMapProvider::unconfigured())
        .profiles(MockProfileRepository::unconfigured())
        .build();

    let response = context.client.get("/health").await;

    assert_eq!(response.status_code(), 200);
    assert_ok_body(&response);
    assert_eq!(
        response.body["services"],
        json!({"mail": false, "maps": false, "profiles": false})
    );
}

#[rstest]
#[tokio::test]
async fn profiles_need_token_verification_configured() {
    let context = TestContext::builder()
        .identity(MockIdentityVerifier::unconfigured())
        .build();

    let health = context.client.get("/health").await;
    let profile = context
        .client
        .get_with_headers("/profile", &[("authorization", bearer(ALICE_TOKEN).as_str())])
        .await;

    assert_eq!(
        health.body["services"],
        json!({"mail": true, "maps": true, "profiles": false})
    );
    assert_error(&profile, 500, "Missing FIREBASE_WEB_API_KEY");
}
