pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod serverless;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EnvSettings, SiteConfig};

pub use core::{FormReply, SubmissionHandler};
pub use utils::error::{Result, SiteError};
