pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "passkeep")]
#[command(about = "Manage categories and credential entries on a passkeep backend")]
pub struct Args {
    /// Base URL of the backend (overrides the configured remote)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the passkeep config directory (defaults to ~/.passkeep)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: crate::Command,
}
