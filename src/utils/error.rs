use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed: {}", summarize(.errors))]
    ValidationError { errors: Vec<FieldError> },

    #[error("Email provider error ({status}): {message}")]
    EmailProviderError { status: u16, message: String },

    #[error("Blog store error: {message}")]
    BlogStoreError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Upstream,
    Internal,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::ConfigError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::TomlError(_) => ErrorCategory::Configuration,
            SiteError::ValidationError { .. } => ErrorCategory::Validation,
            SiteError::EmailProviderError { .. } | SiteError::BlogStoreError { .. } => {
                ErrorCategory::Upstream
            }
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// Status an HTTP caller sees for this error. Only validation problems
    /// are the caller's fault; everything else is reported as a server error.
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::MissingConfigError { field } => {
                format!("Server configuration error: {} is not set", field)
            }
            SiteError::ValidationError { errors } => summarize(errors),
            SiteError::EmailProviderError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SiteError>;
