//! Shared application state passed to every Axum handler via `State`.

use crate::adapters::{ResendMailer, SupabaseBlogStore};
use crate::config::site::{KairosConfig, SiteConfig};
use crate::core::SubmissionHandler;
use crate::domain::ports::BlogStore;
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submissions: SubmissionHandler,
    pub blog: Arc<dyn BlogStore>,
    /// Where the Kairos Creative password-reset page posts to and redirects.
    pub kairos: KairosConfig,
}

impl AppState {
    pub fn new(submissions: SubmissionHandler, blog: Arc<dyn BlogStore>, kairos: KairosConfig) -> Self {
        Self {
            submissions,
            blog,
            kairos,
        }
    }

    /// Wires the production adapters described by `config`.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let mailer = ResendMailer::new(config.resend_endpoint())?;
        tracing::info!("Email provider endpoint: {}", mailer.endpoint());

        let blog_settings = config.blog_settings();
        if blog_settings.is_none() {
            tracing::warn!("Blog store is not configured; /blog will show an error message");
        }

        Ok(Self::new(
            SubmissionHandler::new(Arc::new(mailer), config.settings_source()),
            Arc::new(SupabaseBlogStore::new(blog_settings)?),
            config.kairos.clone(),
        ))
    }
}
