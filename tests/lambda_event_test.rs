use httpmock::prelude::*;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use vanguardhive::adapters::ResendMailer;
use vanguardhive::config::env;
use vanguardhive::serverless::{handle_proxy_event, ProxyRequest};
use vanguardhive::{EnvSettings, SubmissionHandler};

fn set_mail_env() {
    std::env::set_var(env::RESEND_API_KEY, "re_lambda_key");
    std::env::set_var(env::NOTIFICATION_EMAIL, "team@vanguardhive.com");
    std::env::set_var(env::FROM_EMAIL, "noreply@vanguardhive.com");
}

fn clear_mail_env() {
    for name in [env::RESEND_API_KEY, env::NOTIFICATION_EMAIL, env::FROM_EMAIL] {
        std::env::remove_var(name);
    }
}

fn handler(endpoint: String) -> SubmissionHandler {
    let mailer = ResendMailer::new(endpoint).expect("mailer builds");
    SubmissionHandler::new(Arc::new(mailer), Arc::new(EnvSettings))
}

fn event(value: serde_json::Value) -> ProxyRequest {
    serde_json::from_value(value).expect("valid proxy event")
}

/// API Gateway REST 事件 (base64 body) 會被解碼並轉寄
#[tokio::test]
#[serial]
async fn test_rest_event_with_base64_body() {
    set_mail_env();
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("authorization", "Bearer re_lambda_key")
                .body_contains("New TehorIA beta request from Marta");
            then.status(200).json_body(json!({ "id": "email_lambda" }));
        })
        .await;

    // {"name":"Marta","email":"marta@example.com","formType":"tehoria-beta"}
    let body = "eyJuYW1lIjoiTWFydGEiLCJlbWFpbCI6Im1hcnRhQGV4YW1wbGUuY29tIiwiZm9ybVR5cGUiOiJ0ZWhvcmlhLWJldGEifQ==";
    let response = handle_proxy_event(
        &handler(server.url("/emails")),
        event(json!({ "httpMethod": "POST", "body": body, "isBase64Encoded": true })),
    )
    .await;

    resend.assert_async().await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["Content-Type"], "application/json");
    let reply: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(reply["id"], "email_lambda");
    clear_mail_env();
}

#[tokio::test]
#[serial]
async fn test_http_api_event_rejects_get() {
    set_mail_env();
    let response = handle_proxy_event(
        &handler("http://127.0.0.1:9/emails".to_string()),
        event(json!({ "requestContext": { "http": { "method": "GET" } } })),
    )
    .await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.headers["Allow"], "POST");
    clear_mail_env();
}

#[tokio::test]
#[serial]
async fn test_missing_env_is_reported_per_request() {
    clear_mail_env();
    let response = handle_proxy_event(
        &handler("http://127.0.0.1:9/emails".to_string()),
        event(json!({
            "httpMethod": "POST",
            "body": r#"{"email":"ana@example.com","message":"Hello there, team!"}"#
        })),
    )
    .await;

    assert_eq!(response.status_code, 500);
    assert!(response.body.contains("RESEND_API_KEY"));
}
