use crate::config::env;
use crate::domain::model::{BlogPost, BlogSettings};
use crate::domain::ports::BlogStore;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
/// PostgREST code for "the result contains 0 rows" on a single-object request.
const NO_ROWS: &str = "PGRST116";

/// Reads the `blog_posts` table through Supabase's PostgREST API.
#[derive(Debug, Clone)]
pub struct SupabaseBlogStore {
    client: Client,
    settings: Option<BlogSettings>,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

impl SupabaseBlogStore {
    /// `None` settings produce a store whose every query fails with a
    /// configuration error, so pages can still render that message.
    pub fn new(settings: Option<BlogSettings>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, settings })
    }

    fn request(&self) -> Result<RequestBuilder> {
        let settings = self
            .settings
            .as_ref()
            .ok_or_else(|| SiteError::MissingConfigError {
                field: env::SUPABASE_URL.to_string(),
            })?;

        let url = format!(
            "{}/rest/v1/blog_posts",
            settings.base_url.trim_end_matches('/')
        );
        Ok(self
            .client
            .get(url)
            .header("apikey", &settings.anon_key)
            .bearer_auth(&settings.anon_key))
    }

    async fn read_error(response: Response) -> PostgrestError {
        let status = response.status();
        let raw = response.text().await.unwrap_or_default();
        serde_json::from_str(&raw).unwrap_or(PostgrestError {
            code: None,
            message: Some(if raw.trim().is_empty() {
                status.to_string()
            } else {
                raw
            }),
        })
    }
}

impl PostgrestError {
    fn into_site_error(self) -> SiteError {
        let message = match (self.code, self.message) {
            (Some(code), Some(message)) => format!("{} ({})", message, code),
            (None, Some(message)) => message,
            (Some(code), None) => code,
            (None, None) => "unknown error".to_string(),
        };
        SiteError::BlogStoreError { message }
    }
}

#[async_trait]
impl BlogStore for SupabaseBlogStore {
    async fn list_posts(&self) -> Result<Vec<BlogPost>> {
        let response = self
            .request()?
            .query(&[("select", "*"), ("order", "published_at.desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::read_error(response).await;
            tracing::error!("Error fetching blog posts: {:?}", err);
            return Err(err.into_site_error());
        }

        let posts: Vec<BlogPost> = response.json().await?;
        tracing::debug!("Fetched {} blog posts", posts.len());
        Ok(posts)
    }

    async fn find_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        let filter = format!("eq.{}", slug);
        let response = self
            .request()?
            .query(&[("select", "*"), ("slug", filter.as_str())])
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(Some(response.json().await?));
        }

        let err = Self::read_error(response).await;
        if err.code.as_deref() == Some(NO_ROWS) || status == StatusCode::NOT_ACCEPTABLE {
            tracing::debug!("No blog post with slug {}", slug);
            return Ok(None);
        }

        tracing::error!("Error fetching blog post with slug {}: {:?}", slug, err);
        Err(err.into_site_error())
    }
}
