//! API Gateway proxy events (REST v1 and HTTP v2 payloads) for the Lambda
//! deployment of the submission endpoint.

use crate::core::{FormReply, SubmissionHandler};
use axum::http::Method;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// REST API (v1) payloads.
    pub http_method: Option<String>,
    /// HTTP API (v2) payloads carry the method here instead.
    pub request_context: Option<RequestContext>,
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    pub fn method(&self) -> Method {
        let raw = self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|c| c.http.as_ref())
                .and_then(|h| h.method.as_deref())
        });
        raw.and_then(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()).ok())
            .unwrap_or(Method::GET)
    }

    /// Undecodable base64 is passed through as-is and fails JSON parsing downstream.
    pub fn body_bytes(&self) -> Vec<u8> {
        let body = self.body.as_deref().unwrap_or_default();
        if self.is_base64_encoded {
            match base64::engine::general_purpose::STANDARD.decode(body) {
                Ok(bytes) => return bytes,
                Err(e) => tracing::warn!("Request body is not valid base64: {}", e),
            }
        }
        body.as_bytes().to_vec()
    }
}

impl From<FormReply> for ProxyResponse {
    fn from(reply: FormReply) -> Self {
        let mut headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        if let Some(allow) = reply.allow {
            headers.insert("Allow".to_string(), allow.to_string());
        }
        Self {
            status_code: reply.status.as_u16(),
            headers,
            body: reply.body.to_string(),
            is_base64_encoded: false,
        }
    }
}

pub async fn handle_proxy_event(handler: &SubmissionHandler, event: ProxyRequest) -> ProxyResponse {
    let method = event.method();
    tracing::info!("Request Method: {}", method);
    handler.handle(&method, &event.body_bytes()).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_from_rest_and_http_payloads() {
        let v1: ProxyRequest =
            serde_json::from_value(serde_json::json!({ "httpMethod": "POST" })).unwrap();
        assert_eq!(v1.method(), Method::POST);

        let v2: ProxyRequest = serde_json::from_value(serde_json::json!({
            "requestContext": { "http": { "method": "put" } }
        }))
        .unwrap();
        assert_eq!(v2.method(), Method::PUT);
    }

    #[test]
    fn decodes_base64_bodies() {
        let event = ProxyRequest {
            body: Some("eyJhIjoxfQ==".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        assert_eq!(event.body_bytes(), br#"{"a":1}"#.to_vec());
    }

    #[test]
    fn allow_header_is_carried() {
        let reply = FormReply::method_not_allowed(&Method::DELETE);
        let response = ProxyResponse::from(reply);
        assert_eq!(response.status_code, 405);
        assert_eq!(response.headers.get("Allow").map(String::as_str), Some("POST"));
        assert!(response.body.contains("Method DELETE Not Allowed"));
    }
}
