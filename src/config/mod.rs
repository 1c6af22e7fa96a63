#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod site;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::EnvSettings;
pub use site::SiteConfig;
