//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, LogFormat},
    error::{Error, Result},
};

/// Build the log filter from `service.log_level`, falling back to `info`
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| {
        eprintln!(
            "invalid log level '{}', falling back to info",
            config.service.log_level
        );
        EnvFilter::new("info")
    })
}

/// Initialize the global tracing subscriber
///
/// Must be called once per process, before either server starts.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = env_filter(config);

    let installed = match config.service.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init(),
    };
    installed.map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(
        environment = %config.service.environment,
        "Tracing initialized for service: {}",
        config.service.name
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_reports_error() {
        let config = Config::default();
        // First call may race with other tests installing a subscriber
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_bad_filter_falls_back() {
        let mut config = Config::default();
        config.service.log_level = "roster=loud".to_string();
        let filter = env_filter(&config);
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::INFO)
        );
    }
}
