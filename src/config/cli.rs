use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vanguardhive")]
#[command(about = "VanguardHive website and form relay server")]
pub struct CliConfig {
    /// Overrides `[server].listen_addr` and `LISTEN_ADDR`.
    #[arg(long)]
    pub listen_addr: Option<String>,

    #[arg(long, help = "Path to a TOML site configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
