use crate::config::env;
use crate::domain::model::{BlogSettings, MailSettings};
use crate::domain::ports::SettingsSource;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_email_setting, validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex"));

pub const DEFAULT_KAIROS_BACKEND_URL: &str = "https://kairos-creative-webhook-lf2l.onrender.com";
pub const DEFAULT_KAIROS_APP_URL: &str = "https://kairos-creative-app-pr6z7.onrender.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub mail: Option<MailConfig>,
    pub blog: Option<BlogConfig>,
    #[serde(default)]
    pub kairos: KairosConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_addr: Option<String>,
    /// Origins allowed to POST forms cross-site. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// `[mail]` table. Values may be blank; that is only an error once a form
/// is actually submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailConfig {
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub notification_email: String,
    #[serde(default)]
    pub from_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    pub base_url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KairosConfig {
    pub backend_url: String,
    pub app_url: String,
}

impl Default for KairosConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_KAIROS_BACKEND_URL.to_string(),
            app_url: DEFAULT_KAIROS_APP_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Configuration assembled only from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: env::optional_var(env::LISTEN_ADDR),
                cors_origins: Vec::new(),
            },
            mail: None,
            blog: env::blog_settings().map(|b| BlogConfig {
                base_url: b.base_url,
                anon_key: b.anon_key,
            }),
            kairos: KairosConfig {
                backend_url: env::optional_var(env::KAIROS_BACKEND_URL)
                    .unwrap_or_else(|| DEFAULT_KAIROS_BACKEND_URL.to_string()),
                app_url: env::optional_var(env::KAIROS_APP_URL)
                    .unwrap_or_else(|| DEFAULT_KAIROS_APP_URL.to_string()),
            },
        }
    }

    /// 替換環境變數 (例如 ${RESEND_API_KEY})
    ///
    /// Unset variables become empty strings so the affected setting reads as
    /// missing instead of carrying the literal placeholder.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!("Environment variable {} referenced in config is not set", var_name);
                    String::new()
                })
            })
            .into_owned()
    }

    pub fn listen_addr(&self) -> String {
        self.server
            .listen_addr
            .clone()
            .unwrap_or_else(|| env::DEFAULT_LISTEN_ADDR.to_string())
    }

    pub fn resend_endpoint(&self) -> String {
        self.mail
            .as_ref()
            .and_then(|m| m.endpoint.clone())
            .unwrap_or_else(env::resend_endpoint)
    }

    /// The `[mail]` table when present, the environment otherwise.
    pub fn settings_source(&self) -> Arc<dyn SettingsSource> {
        match &self.mail {
            Some(mail) => Arc::new(mail.clone()),
            None => Arc::new(env::EnvSettings),
        }
    }

    pub fn blog_settings(&self) -> Option<BlogSettings> {
        self.blog.as_ref().map(|b| BlogSettings {
            base_url: b.base_url.clone(),
            anon_key: b.anon_key.clone(),
        })
    }
}

impl SettingsSource for MailConfig {
    fn mail_settings(&self) -> Result<MailSettings> {
        let require = |field: &str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(SiteError::MissingConfigError {
                    field: field.to_string(),
                })
            } else {
                Ok(value.to_string())
            }
        };

        Ok(MailSettings {
            api_key: require("mail.api_key", &self.api_key)?,
            notification_email: require("mail.notification_email", &self.notification_email)?,
            from_email: require("mail.from_email", &self.from_email)?,
        })
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(addr) = &self.server.listen_addr {
            addr.parse::<std::net::SocketAddr>()
                .map_err(|e| SiteError::InvalidConfigValueError {
                    field: "server.listen_addr".to_string(),
                    value: addr.clone(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(mail) = &self.mail {
            if let Some(endpoint) = &mail.endpoint {
                validate_url("mail.endpoint", endpoint)?;
            }
            // Blank mail values are allowed here; they fail per request.
            if !mail.notification_email.trim().is_empty() {
                validate_email_setting("mail.notification_email", &mail.notification_email)?;
            }
            if !mail.from_email.trim().is_empty() {
                validate_email_setting("mail.from_email", &mail.from_email)?;
            }
        }

        if let Some(blog) = &self.blog {
            validate_url("blog.base_url", &blog.base_url)?;
            validate_non_empty_string("blog.anon_key", &blog.anon_key)?;
        }

        validate_url("kairos.backend_url", &self.kairos.backend_url)?;
        validate_url("kairos.app_url", &self.kairos.app_url)?;

        tracing::info!("✅ Site configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const SAMPLE: &str = r#"
[server]
listen_addr = "127.0.0.1:8080"

[mail]
api_key = "${VH_TEST_RESEND_KEY}"
notification_email = "team@vanguardhive.com"
from_email = "VanguardHive <noreply@vanguardhive.com>"

[blog]
base_url = "https://abc.supabase.co"
anon_key = "anon"
"#;

    #[test]
    #[serial]
    fn substitutes_environment_placeholders() {
        std::env::set_var("VH_TEST_RESEND_KEY", "re_from_env");
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();
        std::env::remove_var("VH_TEST_RESEND_KEY");

        let mail = config.settings_source().mail_settings().unwrap();
        assert_eq!(mail.api_key, "re_from_env");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn unset_placeholder_reads_as_missing_key() {
        std::env::remove_var("VH_TEST_RESEND_KEY");
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();

        match config.settings_source().mail_settings() {
            Err(SiteError::MissingConfigError { field }) => assert_eq!(field, "mail.api_key"),
            other => panic!("expected missing api key, got {:?}", other),
        }
        // Still a loadable config: the key is only needed per submission.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_apply_for_empty_file() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.listen_addr(), env::DEFAULT_LISTEN_ADDR);
        assert_eq!(config.kairos.backend_url, DEFAULT_KAIROS_BACKEND_URL);
        assert!(config.blog_settings().is_none());
    }

    #[test]
    fn rejects_bad_blog_url() {
        let config = SiteConfig::from_toml_str(
            r#"
[blog]
base_url = "not a url"
anon_key = "anon"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
