use crate::domain::model::{BlogPost, MailSettings, OutgoingEmail, SentEmail};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transactional email provider.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SentEmail>;
}

/// Read-only access to published blog posts.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Newest first.
    async fn list_posts(&self) -> Result<Vec<BlogPost>>;
    async fn find_post(&self, slug: &str) -> Result<Option<BlogPost>>;
}

/// Where mail settings come from. Implementations are consulted on every
/// submission, so a missing key surfaces per request rather than at startup.
pub trait SettingsSource: Send + Sync {
    fn mail_settings(&self) -> Result<MailSettings>;
}
