//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, `spendlog.toml`,
//! `SPENDLOG_*` environment variables, command-line flags.

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "spendlog.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backing CSV file.
    pub file: String,
    /// Log level for the stderr subscriber.
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: engine::DEFAULT_PATH.to_string(),
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "spendlog", about = "Personal expense tracker")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the expenses file.
    #[arg(long)]
    pub file: Option<String>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPENDLOG"))
            .build()?
            .try_deserialize()?;

        if let Some(file) = args.file {
            settings.file = file;
        }
        if let Some(level) = args.level {
            settings.level = level;
        }

        Ok(settings)
    }
}
