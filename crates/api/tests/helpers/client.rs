#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

// =============================================================================
// TestResponse
// =============================================================================

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,

    pub headers: HeaderMap,

    /// Parsed JSON, a JSON string for non-JSON text, or `Null` when empty.
    pub body: JsonValue,
}

impl TestResponse {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

// =============================================================================
// TestClient
// =============================================================================

/// Drives a router in-process, one request per call.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.get_with_headers(path, &[]).await
    }

    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send(Method::GET, path, headers, Body::empty()).await
    }

    pub async fn post_json(&self, path: &str, body: &JsonValue) -> TestResponse {
        self.post_json_with_headers(path, body, &[]).await
    }

    pub async fn post_json_with_headers(
        &self,
        path: &str,
        body: &JsonValue,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut headers = headers.to_vec();
        headers.push(("content-type", "application/json"));
        self.send(Method::POST, path, &headers, Body::from(body.to_string()))
            .await
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        self.send(
            Method::POST,
            path,
            &[("content-type", content_type)],
            Body::from(body.to_string()),
        )
        .await
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(body).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                JsonValue::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
