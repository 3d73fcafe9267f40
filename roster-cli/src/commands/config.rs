use anyhow::{Context, Result};
use colored::Colorize;
use roster::config::Config;

use super::ConfigArgs;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = args.load()?;

    if let Some(path) = &args.config {
        eprintln!("{} {}", "Loaded".green().bold(), path.display());
    }
    print!("{}", render(&config)?);

    Ok(())
}

/// Effective configuration as TOML, with database credentials masked
fn render(config: &Config) -> Result<String> {
    let mut config = config.clone();
    if let Some(db) = config.database.as_mut() {
        db.url = roster::error::sanitize_url(&db.url);
    }
    toml::to_string_pretty(&config).context("Failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::config::DatabaseConfig;

    #[test]
    fn test_render_defaults() {
        let out = render(&Config::default()).unwrap();
        assert!(out.contains("[service]"));
        assert!(out.contains("name = \"roster\""));
        assert!(out.contains("page_size = 20"));
    }

    #[test]
    fn test_render_masks_password() {
        let mut config = Config::default();
        config.database = Some(DatabaseConfig {
            url: "postgres://roster:hunter2@db:5432/roster".to_string(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout_secs: 10,
            max_retries: 5,
            retry_delay_secs: 2,
        });

        let out = render(&config).unwrap();
        assert!(!out.contains("hunter2"));
        assert!(out.contains("postgres://<redacted>@db:5432/roster"));
    }
}
