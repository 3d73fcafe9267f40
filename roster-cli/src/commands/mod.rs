use anyhow::{Context, Result};
use clap::Args;
use roster::config::Config;
use std::path::PathBuf;

pub mod config;
pub mod serve;

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Load configuration from this file instead of the standard locations
    #[arg(short, long, value_name = "PATH", env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => Config::load().context("Failed to load configuration"),
        }
    }
}

/// Options for `roster api`
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Port to listen on, overriding the configuration
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

/// Options for `roster web`
#[derive(Args, Debug, Clone, Default)]
pub struct WebArgs {
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Base URL of the users API, overriding `web.api_url`
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}
