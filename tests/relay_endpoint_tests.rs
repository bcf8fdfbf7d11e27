//! Integration tests for the relay endpoint, driving the axum router in-process.

mod mocks;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mocks::MockMailer;
use portfolio_relay::error::MailApiError;
use portfolio_relay::relay::{router, AppState, SUBMIT_PATH};
use portfolio_relay::Mailer;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const VALID_BODY: &str = r#"{"name":"Ana","email":"a@x.com","message":"Hi"}"#;

fn state_with(mock: &MockMailer) -> AppState {
    AppState {
        mailer: Some(Arc::new(mock.clone()) as Arc<dyn Mailer>),
        sender: "Portfolio Contact <onboarding@resend.dev>".to_string(),
        recipient: "owner@example.com".to_string(),
    }
}

fn unconfigured_state() -> AppState {
    AppState {
        mailer: None,
        sender: "Portfolio Contact <onboarding@resend.dev>".to_string(),
        recipient: "owner@example.com".to_string(),
    }
}

async fn request(state: AppState, method: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(SUBMIT_PATH);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = body
        .map(|b| Body::from(b.to_string()))
        .unwrap_or_else(Body::empty);

    let response = router(state).oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_valid_submission_forwards_upstream_payload() {
    let mock = MockMailer::new();
    mock.push_response(Ok(json!({ "id": "abc" })));

    let (status, body) = request(state_with(&mock), "POST", Some(VALID_BODY)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": { "id": "abc" } }));
    assert_eq!(mock.send_count(), 1);

    let email = mock.last_email().unwrap();
    assert_eq!(email.from, "Portfolio Contact <onboarding@resend.dev>");
    assert_eq!(email.to, vec!["owner@example.com".to_string()]);
    assert_eq!(email.subject, "New Portfolio Message from Ana");
    assert!(email.html.contains("a@x.com"));
}

#[tokio::test]
async fn test_empty_payload_is_rejected_without_forwarding() {
    let mock = MockMailer::new();

    let (status, body) = request(state_with(&mock), "POST", Some("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
    assert_eq!(mock.send_count(), 0);
}

#[tokio::test]
async fn test_each_missing_field_is_rejected_without_forwarding() {
    let payloads = [
        r#"{"email":"a@x.com","message":"Hi"}"#,
        r#"{"name":"Ana","message":"Hi"}"#,
        r#"{"name":"Ana","email":"a@x.com"}"#,
        r#"{"name":"","email":"a@x.com","message":"Hi"}"#,
    ];

    for payload in payloads {
        let mock = MockMailer::new();
        let (status, body) = request(state_with(&mock), "POST", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body, json!({ "error": "Missing required fields" }));
        assert_eq!(mock.send_count(), 0, "payload: {}", payload);
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected_without_forwarding() {
    let mock = MockMailer::new();

    let (status, body) = request(state_with(&mock), "POST", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid JSON body" }));
    assert_eq!(mock.send_count(), 0);
}

#[tokio::test]
async fn test_double_encoded_body_is_unwrapped() {
    let mock = MockMailer::new();
    mock.push_response(Ok(json!({ "id": "abc" })));

    let wrapped = serde_json::to_string(&Value::String(VALID_BODY.to_string())).unwrap();
    let (status, body) = request(state_with(&mock), "POST", Some(&wrapped)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(mock.send_count(), 1);
}

#[tokio::test]
async fn test_non_post_methods_are_rejected_before_parsing() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let mock = MockMailer::new();
        // A body that would fail parsing proves the method gate comes first
        let (status, body) = request(state_with(&mock), method, Some("{not json")).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method: {}", method);
        assert_eq!(body, json!({ "error": "Method Not Allowed" }));
        assert_eq!(mock.send_count(), 0);
    }
}

#[tokio::test]
async fn test_missing_secret_fails_closed() {
    let (status, body) = request(unconfigured_state(), "POST", Some(VALID_BODY)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Server configuration error" }));
}

#[tokio::test]
async fn test_upstream_rejection_is_echoed() {
    let mock = MockMailer::new();
    let upstream_error = json!({ "statusCode": 422, "message": "Invalid `from` field" });
    mock.push_response(Err(MailApiError::Rejected {
        status: 422,
        body: upstream_error.clone(),
    }));

    let (status, body) = request(state_with(&mock), "POST", Some(VALID_BODY)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "success": false, "error": upstream_error }));
    assert_eq!(mock.send_count(), 1);
}

#[tokio::test]
async fn test_upstream_unreachable_is_generic_500() {
    let mock = MockMailer::new();
    mock.push_response(Err(MailApiError::HttpError(
        "Connection failed".to_string(),
    )));

    let (status, body) = request(state_with(&mock), "POST", Some(VALID_BODY)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_upstream_timeout_is_generic_500() {
    let mock = MockMailer::new();
    mock.push_response(Err(MailApiError::Timeout));

    let (status, body) = request(state_with(&mock), "POST", Some(VALID_BODY)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_submission_fields_are_escaped_in_notification() {
    let mock = MockMailer::new();
    let payload = r#"{"name":"<b>Ana</b>","email":"a@x.com","message":"<script>x</script>"}"#;

    let (status, _) = request(state_with(&mock), "POST", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let email = mock.last_email().unwrap();
    assert!(!email.html.contains("<script>"));
    assert!(email.html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_health_route() {
    let mock = MockMailer::new();

    let response = router(state_with(&mock))
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
