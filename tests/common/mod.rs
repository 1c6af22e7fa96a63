#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vanguardhive::config::site::{BlogConfig, MailConfig, SiteConfig};
use vanguardhive::web::{self, AppState};

pub const API_KEY: &str = "re_test_key";
pub const ANON_KEY: &str = "anon_test_key";
pub const NOTIFICATION_EMAIL: &str = "team@vanguardhive.com";
pub const FROM_EMAIL: &str = "VanguardHive <noreply@vanguardhive.com>";

pub fn mail_config(endpoint: &str) -> MailConfig {
    MailConfig {
        endpoint: Some(endpoint.to_string()),
        api_key: API_KEY.to_string(),
        notification_email: NOTIFICATION_EMAIL.to_string(),
        from_email: FROM_EMAIL.to_string(),
    }
}

pub fn blog_config(base_url: &str) -> BlogConfig {
    BlogConfig {
        base_url: base_url.to_string(),
        anon_key: ANON_KEY.to_string(),
    }
}

pub fn site_config(mail: MailConfig, blog: Option<BlogConfig>) -> SiteConfig {
    SiteConfig {
        mail: Some(mail),
        blog,
        ..Default::default()
    }
}

/// Full router, with the same layers the server runs with.
pub fn test_app(config: &SiteConfig) -> Router {
    let state = AppState::from_config(config).expect("test state builds");
    web::app(state, &config.server.cors_origins)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}
