use crate::utils::error::{FieldError, Result, SiteError};
use crate::utils::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw JSON body posted to `/api/submit-form`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub project: Option<String>,
    pub form_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    Contact,
    TehoriaBeta,
    KairosBeta,
}

impl FormType {
    pub const ALL: [FormType; 3] = [FormType::Contact, FormType::TehoriaBeta, FormType::KairosBeta];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Contact => "contact",
            FormType::TehoriaBeta => "tehoria-beta",
            FormType::KairosBeta => "kairos-beta",
        }
    }

    pub fn max_message_len(&self) -> usize {
        match self {
            FormType::Contact => 1000,
            FormType::TehoriaBeta | FormType::KairosBeta => 500,
        }
    }

    pub fn requires_company(&self) -> bool {
        matches!(self, FormType::KairosBeta)
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FormType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown form type '{}'. Expected one of: contact, tehoria-beta, kairos-beta",
                    s
                )
            })
    }
}

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_COMPANY_LEN: usize = 2;
pub const MAX_COMPANY_LEN: usize = 200;
pub const MAX_PHONE_LEN: usize = 40;
pub const MAX_PROJECT_LEN: usize = 200;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Trimmed, blank-to-`None` view of an optional form field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ContactSubmission {
    /// `formType` wins; without it the submission is a plain contact request.
    pub fn resolve_form_type(&self) -> std::result::Result<FormType, String> {
        match present(&self.form_type) {
            Some(tag) => tag.parse(),
            None => Ok(FormType::Contact),
        }
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        errors.check_email("email", present(&self.email));

        let form_type = self.resolve_form_type();
        let known_type = form_type.as_ref().ok().copied();

        if let Some(name) = present(&self.name) {
            errors.check_length("name", name, MIN_NAME_LEN, MAX_NAME_LEN);
        }

        match present(&self.company) {
            Some(company) => {
                errors.check_length("company", company, MIN_COMPANY_LEN, MAX_COMPANY_LEN)
            }
            None if known_type.is_some_and(|t| t.requires_company()) => {
                errors.push("company", "Company is required")
            }
            None => {}
        }

        if let Some(phone) = present(&self.phone) {
            errors.check_length("phone", phone, 0, MAX_PHONE_LEN);
        }

        if let Some(message) = present(&self.message) {
            let max = known_type.unwrap_or(FormType::Contact).max_message_len();
            errors.check_length("message", message, MIN_MESSAGE_LEN, max);
        }

        if let Some(project) = present(&self.project) {
            errors.check_length("project", project, 0, MAX_PROJECT_LEN);
        }

        if let Err(reason) = form_type {
            errors.push("formType", reason);
        }

        errors.into_result()
    }
}

/// A submission that passed validation, with blanks normalized away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub form_type: FormType,
    pub name: Option<String>,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub project: Option<String>,
}

impl ValidSubmission {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }
}

impl TryFrom<ContactSubmission> for ValidSubmission {
    type Error = SiteError;

    fn try_from(raw: ContactSubmission) -> Result<Self> {
        raw.validate()?;

        let owned = |v: &Option<String>| present(v).map(str::to_string);
        let form_type = raw
            .resolve_form_type()
            .map_err(|message| SiteError::ValidationError {
                errors: vec![FieldError::new("formType", message)],
            })?;
        let email = owned(&raw.email).unwrap_or_default();

        Ok(Self {
            form_type,
            name: owned(&raw.name),
            email,
            company: owned(&raw.company),
            phone: owned(&raw.phone),
            message: owned(&raw.message),
            project: owned(&raw.project),
        })
    }
}

/// Email handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SentEmail {
    pub id: String,
}

/// Settings the submission handler needs at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub api_key: String,
    pub notification_email: String,
    pub from_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSettings {
    pub base_url: String,
    pub anon_key: String,
}

/// Row of the hosted `blog_posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub created_at: Option<String>,
    /// Null for drafts.
    pub published_at: Option<String>,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub original_url: Option<String>,
    pub project_tag: Option<String>,
    pub image_url: Option<String>,
    pub image_attribution_text: Option<String>,
    pub image_attribution_url: Option<String>,
}

impl BlogPost {
    /// Long-form publish date, falling back to the raw value when unparsable.
    pub fn published_on(&self) -> Option<String> {
        let raw = self.published_at.as_deref()?;
        let formatted = chrono::DateTime::parse_from_rfc3339(raw)
            .map(|d| d.format("%B %-d, %Y").to_string())
            .or_else(|_| {
                chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map(|d| d.format("%B %-d, %Y").to_string())
            })
            .unwrap_or_else(|_| raw.to_string());
        Some(formatted)
    }
}
