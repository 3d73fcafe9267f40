use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use commands::{ConfigArgs, ServeArgs, WebArgs};

/// roster - paginated user listing servers
#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the users API (GET /users)
    Api(ServeArgs),
    /// Run the users page (GET /)
    Web(WebArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Api(args) => commands::serve::api(args).await,
        Commands::Web(args) => commands::serve::web(args).await,
        Commands::Config(args) => commands::config::execute(args),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_web_overrides() {
        let cli = Cli::try_parse_from([
            "roster",
            "web",
            "--port",
            "8081",
            "--api-url",
            "http://api:3000",
        ])
        .unwrap();

        match cli.command {
            Commands::Web(args) => {
                assert_eq!(args.serve.port, Some(8081));
                assert_eq!(args.api_url.as_deref(), Some("http://api:3000"));
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["roster", "migrate"]).is_err());
    }
}
