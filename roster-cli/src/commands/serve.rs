use anyhow::{Context, Result};
use roster::config::Config;
use roster::observability::init_tracing;

use super::{ServeArgs, WebArgs};

pub async fn api(args: ServeArgs) -> Result<()> {
    let config = api_config(&args)?;
    init_tracing(&config)?;

    roster::app::run_api(config)
        .await
        .context("Users API stopped with an error")
}

pub async fn web(args: WebArgs) -> Result<()> {
    let config = web_config(&args)?;
    init_tracing(&config)?;

    roster::app::run_web(config)
        .await
        .context("Users page stopped with an error")
}

fn api_config(args: &ServeArgs) -> Result<Config> {
    let mut config = args.config.load()?;
    if let Some(port) = args.port {
        config.api.port = port;
    }
    Ok(config)
}

fn web_config(args: &WebArgs) -> Result<Config> {
    let mut config = args.serve.config.load()?;
    if let Some(port) = args.serve.port {
        config.web.port = port;
    }
    if let Some(url) = &args.api_url {
        config.web.api_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ConfigArgs;
    use std::io::Write;

    fn config_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
name = "roster-cli-test"

[api]
port = 4000

[web]
port = 4001
"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_port_override() {
        let file = config_file();
        let args = ServeArgs {
            config: ConfigArgs {
                config: Some(file.path().to_path_buf()),
            },
            port: Some(9000),
        };
        assert_eq!(api_config(&args).unwrap().api.port, 9000);
    }

    #[test]
    fn test_web_overrides() {
        let file = config_file();
        let args = WebArgs {
            serve: ServeArgs {
                config: ConfigArgs {
                    config: Some(file.path().to_path_buf()),
                },
                port: None,
            },
            api_url: Some("http://users-api:4000".to_string()),
        };

        let config = web_config(&args).unwrap();
        assert_eq!(config.web.port, 4001);
        assert_eq!(config.web.api_url, "http://users-api:4000");
    }

    #[test]
    fn test_blank_api_url_rejected() {
        let file = config_file();
        let args = WebArgs {
            serve: ServeArgs {
                config: ConfigArgs {
                    config: Some(file.path().to_path_buf()),
                },
                port: None,
            },
            api_url: Some(" ".to_string()),
        };
        assert!(web_config(&args).is_err());
    }
}
