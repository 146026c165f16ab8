use crate::helpers::{MockMailSender, TestContext, assert_error, assert_ok_body};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use carelink_domain::mail::MAX_ATTACHMENT_BYTES;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

fn valid_mail() -> JsonValue {
    json!({
        "to": "ana@example.com, ben@example.org",
        "subject": "Weekly check-in",
        "text": "How are you doing this week?"
    })
}

// =============================================================================
// Delivery
// =============================================================================

#[rstest]
#[tokio::test]
async fn valid_mail_is_sent() {
    let context = TestContext::new();

    let response = context.client.post_json("/sendMail", &valid_mail()).await;

    assert_eq!(response.status_code(), 200);
    assert_ok_body(&response);

    let sent = context.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipients().len(), 2);
    assert_eq!(sent[0].subject(), "Weekly check-in");
}

#[rstest]
#[tokio::test]
async fn recipients_may_be_an_array() {
    let context = TestContext::new();

    let response = context
        .client
        .post_json(
            "/sendMail",
            &json!({
                "to": ["ana@example.com", "ben@example.org", "cy@example.net"],
                "subject": "Hello",
                "html": "<p>Hi</p>"
            }),
        )
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(context.mailer.sent()[0].recipients().len(), 3);
}

#[rstest]
#[tokio::test]
async fn attachment_is_forwarded() {
    let context = TestContext::new();
    let mut body = valid_mail();
    body["fileBase64"] = json!("aGVsbG8gd29ybGQ=");
    body["fileName"] = json!("notes.txt");
    body["mimeType"] = json!("text/plain");

    let response = context.client.post_json("/sendMail", &body).await;

    assert_eq!(response.status_code(), 200);
    let sent = context.mailer.sent();
    let attachment = sent[0].attachment().expect("attachment kept");
    assert_eq!(attachment.file_name(), "notes.txt");
    assert_eq!(attachment.content(), "aGVsbG8gd29ybGQ=");
}

fn mail_with_attachment_of(size: usize) -> JsonValue {
    let mut body = valid_mail();
    body["fileBase64"] = json!(STANDARD.encode(vec![0u8; size]));
    body["fileName"] = json!("scan.txt");
    body["mimeType"] = json!("text/plain");
    body
}

#[rstest]
#[tokio::test]
async fn attachment_at_size_limit_fits_in_request_body() {
    let context = TestContext::new();

    let response = context
        .client
        .post_json("/sendMail", &mail_with_attachment_of(MAX_ATTACHMENT_BYTES))
        .await;

    assert_eq!(response.status_code(), 200, "body: {}", response.body);
    let sent = context.mailer.sent();
    assert_eq!(sent[0].attachment().map(|attachment| attachment.size()), Some(MAX_ATTACHMENT_BYTES));
}

#[rstest]
#[tokio::test]
async fn attachment_over_size_limit_is_rejected() {
    let context = TestContext::new();

    let response = context
        .client
        .post_json("/sendMail", &mail_with_attachment_of(MAX_ATTACHMENT_BYTES + 1))
        .await;

    assert_error(&response, 400, "Attachment is too large (> ~10MB).");
    assert_eq!(response.body["field"], json!("fileBase64"));
    assert!(context.mailer.sent().is_empty());
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
#[case(json!({"subject": "Hi", "text": "x"}), "\"to\" is required.")]
#[case(json!({"to": "ana@example.com", "text": "x"}), "Subject and either text or html are required.")]
#[case(json!({"to": "ana@example.com", "subject": "Hi"}), "Subject and either text or html are required.")]
#[case(json!({"to": " , ", "subject": "Hi", "text": "x"}), "At least one recipient is required.")]
#[case(json!({"to": [], "subject": "Hi", "text": "x"}), "At least one recipient is required.")]
#[case(json!({"to": "", "subject": "Hi", "text": "x"}), "\"to\" is required.")]
#[case(json!({"to": "not-an-address", "subject": "Hi", "text": "x"}), "Invalid email: not-an-address")]
#[case(
    json!({"to": "a@x.io,b@x.io,c@x.io,d@x.io,e@x.io,f@x.io", "subject": "Hi", "text": "x"}),
    "Up to 5 recipients are allowed per request."
)]
#[case(
    json!({"to": "ana@example.com", "subject": "Hi", "text": "x", "fileBase64": "***", "mimeType": "text/plain"}),
    "Attachment is not valid base64."
)]
#[case(
    json!({"to": "ana@example.com", "subject": "Hi", "text": "x", "fileBase64": "aGVsbG8=", "mimeType": "video/mp4"}),
    "Unsupported attachment type: video/mp4"
)]
#[tokio::test]
async fn invalid_mail_is_rejected(#[case] body: JsonValue, #[case] message: &str) {
    let context = TestContext::new();

    let response = context.client.post_json("/sendMail", &body).await;

    assert_error(&response, 400, message);
    assert!(context.mailer.sent().is_empty());
}

#[rstest]
#[case("application/json", "{not json")]
#[case("application/json", "[1, 2]")]
#[case("application/json", "[]")]
#[case("application/json", r#"["a@x.io", "Hi", "hello"]"#)]
#[case("application/json", r#""a@x.io""#)]
#[case("text/plain", "to=ana@example.com")]
#[tokio::test]
async fn non_object_body_is_rejected(#[case] content_type: &str, #[case] body: &str) {
    let context = TestContext::new();

    let response = context.client.post_raw("/sendMail", content_type, body).await;

    assert_error(&response, 400, "Request body must be a JSON object.");
    assert!(context.mailer.sent().is_empty());
}

// =============================================================================
// Provider Failures
// =============================================================================

#[rstest]
#[tokio::test]
async fn unconfigured_provider_names_missing_settings() {
    let context = TestContext::builder()
        .mailer(MockMailSender::unconfigured())
        .build();

    let response = context.client.post_json("/sendMail", &valid_mail()).await;

    assert_error(&response, 500, "Missing SENDGRID_API_KEY or MAIL_SENDER");
}

#[rstest]
#[tokio::test]
async fn upstream_failure_is_not_leaked() {
    let context = TestContext::builder()
        .mailer(MockMailSender::failing())
        .build();

    let response = context.client.post_json("/sendMail", &valid_mail()).await;

    assert_error(&response, 500, "Failed to send email.");
}
