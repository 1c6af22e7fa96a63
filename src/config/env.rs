//! Settings read straight from the process environment.

use crate::domain::model::{BlogSettings, MailSettings};
use crate::domain::ports::SettingsSource;
use crate::utils::error::{Result, SiteError};
use std::env;

pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const NOTIFICATION_EMAIL: &str = "NOTIFICATION_EMAIL";
pub const FROM_EMAIL: &str = "FROM_EMAIL";
pub const RESEND_API_URL: &str = "RESEND_API_URL";
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const KAIROS_BACKEND_URL: &str = "KAIROS_BACKEND_URL";
pub const KAIROS_APP_URL: &str = "KAIROS_APP_URL";
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";

pub const DEFAULT_RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Unset and whitespace-only variables are both treated as missing.
pub fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required_var(name: &str) -> Result<String> {
    optional_var(name).ok_or_else(|| SiteError::MissingConfigError {
        field: name.to_string(),
    })
}

pub fn resend_endpoint() -> String {
    optional_var(RESEND_API_URL).unwrap_or_else(|| DEFAULT_RESEND_ENDPOINT.to_string())
}

pub fn blog_settings() -> Option<BlogSettings> {
    Some(BlogSettings {
        base_url: optional_var(SUPABASE_URL)?,
        anon_key: optional_var(SUPABASE_ANON_KEY)?,
    })
}

/// Reads the mail variables on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn mail_settings(&self) -> Result<MailSettings> {
        Ok(MailSettings {
            api_key: required_var(RESEND_API_KEY)?,
            notification_email: required_var(NOTIFICATION_EMAIL)?,
            from_email: required_var(FROM_EMAIL)?,
        })
    }
}
