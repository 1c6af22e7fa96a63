use crate::domain::model::{OutgoingEmail, SentEmail};
use crate::domain::ports::Mailer;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend (`POST /emails`) client.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
    name: Option<String>,
}

impl ResendMailer {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SentEmail> {
        let body = SendEmailRequest {
            from: &email.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: &email.reply_to,
        };

        tracing::debug!("Sending email '{}' via {}", email.subject, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Email provider response status: {}", status);

        if status.is_success() {
            let sent: SentEmail = response.json().await?;
            return Ok(sent);
        }

        let raw = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ProviderError>(&raw) {
            Ok(ProviderError {
                message: Some(message),
                ..
            }) => message,
            Ok(ProviderError {
                name: Some(name), ..
            }) => name,
            _ if !raw.trim().is_empty() => raw,
            _ => status
                .canonical_reason()
                .unwrap_or("Unknown provider error")
                .to_string(),
        };

        Err(SiteError::EmailProviderError {
            status: status.as_u16(),
            message,
        })
    }
}
