use crate::core::compose::compose_email;
use crate::domain::model::{ContactSubmission, SentEmail, ValidSubmission};
use crate::domain::ports::{Mailer, SettingsSource};
use crate::utils::error::{ErrorCategory, Result, SiteError};
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// Transport-independent outcome of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReply {
    pub status: StatusCode,
    /// Value for the `Allow` header, set on 405 replies.
    pub allow: Option<&'static str>,
    pub body: Value,
}

impl FormReply {
    pub fn sent(sent: &SentEmail) -> Self {
        Self {
            status: StatusCode::OK,
            allow: None,
            body: json!({ "message": SUCCESS_MESSAGE, "id": sent.id }),
        }
    }

    pub fn method_not_allowed(method: &Method) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            allow: Some("POST"),
            body: json!({ "error": format!("Method {} Not Allowed", method) }),
        }
    }

    pub fn from_error(err: &SiteError) -> Self {
        let (status, body) = match err {
            SiteError::ValidationError { errors } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "details": errors }),
            ),
            // The request body is the only JSON this pipeline parses itself.
            SiteError::SerializationError(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON body", "details": e.to_string() }),
            ),
            SiteError::EmailProviderError { .. } | SiteError::HttpError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to send email", "details": err.user_friendly_message() }),
            ),
            other if other.category() == ErrorCategory::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server configuration error", "details": other.user_friendly_message() }),
            ),
            other => (
                other.status_code(),
                json!({ "error": "Internal server error", "details": other.to_string() }),
            ),
        };
        Self {
            status,
            allow: None,
            body,
        }
    }
}

/// Validates a posted form and relays it to the notification inbox.
#[derive(Clone)]
pub struct SubmissionHandler {
    mailer: Arc<dyn Mailer>,
    settings: Arc<dyn SettingsSource>,
}

impl SubmissionHandler {
    pub fn new(mailer: Arc<dyn Mailer>, settings: Arc<dyn SettingsSource>) -> Self {
        Self { mailer, settings }
    }

    pub async fn handle(&self, method: &Method, body: &[u8]) -> FormReply {
        if *method != Method::POST {
            tracing::info!("Method {} received, only POST allowed", method);
            return FormReply::method_not_allowed(method);
        }

        match self.process(body).await {
            Ok(sent) => FormReply::sent(&sent),
            Err(err) => {
                match err.category() {
                    ErrorCategory::Validation => {
                        tracing::warn!("Rejected form submission: {}", err)
                    }
                    _ => tracing::error!(
                        "❌ Form submission failed: {} (Category: {:?})",
                        err,
                        err.category()
                    ),
                }
                FormReply::from_error(&err)
            }
        }
    }

    async fn process(&self, body: &[u8]) -> Result<SentEmail> {
        // Settings are checked before the payload is even parsed.
        let settings = self.settings.mail_settings()?;

        let raw: ContactSubmission = serde_json::from_slice(body)?;
        let submission = ValidSubmission::try_from(raw)?;
        tracing::debug!(
            "Valid {} submission from {}",
            submission.form_type,
            submission.email
        );

        let email = compose_email(&submission, &settings);
        let sent = self.mailer.send(&settings.api_key, &email).await?;

        tracing::info!(
            "✅ {} submission relayed (email id {})",
            submission.form_type,
            sent.id
        );
        Ok(sent)
    }
}
