mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use httpmock::prelude::*;
use serde_json::json;

/// 有效的聯絡表單會轉寄到通知信箱
#[tokio::test]
async fn test_contact_form_is_relayed() {
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("authorization", format!("Bearer {}", API_KEY))
                .json_body_partial(
                    json!({
                        "from": FROM_EMAIL,
                        "to": [NOTIFICATION_EMAIL],
                        "reply_to": "ana@example.com",
                        "subject": "New contact form submission from Ana Ruiz - Partnership"
                    })
                    .to_string(),
                );
            then.status(200).json_body(json!({ "id": "email_42" }));
        })
        .await;

    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));
    let response = post_json(
        app,
        "/api/submit-form",
        json!({
            "name": "Ana Ruiz",
            "email": "ana@example.com",
            "project": "Partnership",
            "message": "We would like to explore a partnership."
        }),
    )
    .await;

    resend.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["message"], "Form submitted successfully");
    assert_eq!(body["id"], "email_42");
}

#[tokio::test]
async fn test_kairos_beta_subject_includes_company() {
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .body_contains("New KAIROS Jurista beta request from Luis (Bufete Luis)")
                .body_contains("+34 600 000 000");
            then.status(200).json_body(json!({ "id": "email_7" }));
        })
        .await;

    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));
    let response = post_json(
        app,
        "/api/submit-form",
        json!({
            "name": "Luis",
            "company": "Bufete Luis",
            "email": "luis@bufete.es",
            "phone": "+34 600 000 000",
            "message": "Interested in the legal research beta.",
            "formType": "kairos-beta"
        }),
    )
    .await;

    resend.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_email_is_rejected_without_sending() {
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(json!({ "id": "never" }));
        })
        .await;

    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));
    let response = post_json(
        app,
        "/api/submit-form",
        json!({ "name": "Ana", "email": "not-an-email", "message": "Hello there, team!" }),
    )
    .await;

    assert_eq!(resend.hits_async().await, 0);
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_contact_message_length_bounds() {
    let server = MockServer::start_async().await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(json!({ "id": "email_max" }));
        })
        .await;
    let config = site_config(mail_config(&server.url("/emails")), None);

    let at_max = post_json(
        test_app(&config),
        "/api/submit-form",
        json!({ "email": "ana@example.com", "message": "m".repeat(1000) }),
    )
    .await;
    assert_eq!(at_max.status, StatusCode::OK);

    let over_max = post_json(
        test_app(&config),
        "/api/submit-form",
        json!({ "email": "ana@example.com", "message": "m".repeat(1001) }),
    )
    .await;
    assert_eq!(over_max.status, StatusCode::BAD_REQUEST);
    assert_eq!(over_max.json()["details"][0]["field"], "message");
    assert_eq!(resend.hits_async().await, 1);
}

#[tokio::test]
async fn test_overlong_email_is_rejected() {
    let server = MockServer::start_async().await;
    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));
    let email = format!("{}@example.com", "a".repeat(243));
    assert_eq!(email.len(), 255);

    let response = post_json(
        app,
        "/api/submit-form",
        json!({ "email": email, "message": "Hello there, team!" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_kairos_beta_without_company_is_rejected() {
    let server = MockServer::start_async().await;
    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));

    let response = post_json(
        app,
        "/api/submit-form",
        json!({
            "name": "Luis",
            "email": "luis@bufete.es",
            "message": "Interested in the legal research beta.",
            "formType": "kairos-beta"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<String> = response.json()["details"]
        .as_array()
        .expect("details array")
        .iter()
        .map(|d| d["field"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(fields, vec!["company"]);
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let server = MockServer::start_async().await;
    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));

    let response = get(app, "/api/submit-form").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers[header::ALLOW], "POST");
    assert_eq!(response.json()["error"], "Method GET Not Allowed");
}

#[tokio::test]
async fn test_missing_api_key_is_a_server_error() {
    let server = MockServer::start_async().await;
    let mut mail = mail_config(&server.url("/emails"));
    mail.api_key = String::new();
    let app = test_app(&site_config(mail, None));

    // Even an invalid payload reports the configuration problem first.
    let response = post_json(app, "/api/submit-form", json!({ "email": "nope" })).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Server configuration error");
    assert!(body["details"].as_str().unwrap_or_default().contains("mail.api_key"));
}

#[tokio::test]
async fn test_provider_error_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(422).json_body(json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "The `from` domain is not verified."
            }));
        })
        .await;

    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));
    let response = post_json(
        app,
        "/api/submit-form",
        json!({ "email": "ana@example.com", "message": "Hello there, team!" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(body["details"], "The `from` domain is not verified.");
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let server = MockServer::start_async().await;
    let app = test_app(&site_config(mail_config(&server.url("/emails")), None));

    let request = Request::builder()
        .method("POST")
        .uri("/api/submit-form")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Invalid JSON body");
}
