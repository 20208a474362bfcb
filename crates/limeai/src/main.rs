// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LimeAI MCP server.
//!
//! This is the binary entry point: it loads `.env` and configuration, installs
//! logging on stderr, and dispatches to the subcommands.

mod doctor;
mod error;
mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use limeai_config::{LimeConfig, TransportKind};

use crate::error::AppError;

/// LimeAI MCP server - save Markdown and HTML documents to LimeAI from any MCP host.
#[derive(Parser, Debug)]
#[command(name = "limeai", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server (default).
    Serve(ServeArgs),
    /// Check configuration, credential, and API connectivity.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration (credential masked).
    Config,
}

/// Overrides for the `[server]` section.
#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Transport to serve on.
    #[arg(long, value_enum)]
    transport: Option<TransportArg>,

    /// Address for the HTTP transport.
    #[arg(long)]
    bind: Option<String>,

    /// Port for the HTTP transport.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TransportArg {
    Stdio,
    Http,
}

impl ServeArgs {
    fn apply(self, config: &mut LimeConfig) {
        if let Some(transport) = self.transport {
            config.server.transport = match transport {
                TransportArg::Stdio => TransportKind::Stdio,
                TransportArg::Http => TransportKind::Http,
            };
        }
        if let Some(bind) = self.bind {
            config.server.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[tokio::main]
async fn main() {
    // The hosted service documents LIMEAI_ACCESS_TOKEN in a local .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve(ServeArgs::default()));

    let mut config = match limeai_config::load_and_validate(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            limeai_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match command {
        Commands::Serve(args) => {
            args.apply(&mut config);
            if let Err(errors) = limeai_config::validation::validate_config(&config) {
                limeai_config::render_errors(&errors);
                std::process::exit(1);
            }
            init_tracing(&config.server.log_level);
            serve::run_serve(config).await
        }
        Commands::Doctor { plain } => {
            init_tracing(&config.server.log_level);
            doctor::run_doctor(&config, plain).await
        }
        Commands::Config => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Print the effective configuration as TOML. The credential is never
/// serialized, so its presence is reported as a comment.
fn print_config(config: &LimeConfig) -> Result<(), AppError> {
    let rendered = toml::to_string_pretty(config)?;
    print!("{rendered}");
    match config.remote.credential() {
        Some(credential) => println!("# access_token = {}", credential.masked()),
        None => println!("# access_token is not set"),
    }
    Ok(())
}

/// Logs go to stderr: with the stdio transport, stdout carries protocol frames.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let level = log_level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "limeai={level},limeai_client={level},limeai_mcp_server={level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["limeai"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "limeai", "serve", "--transport", "http", "--bind", "0.0.0.0", "--port", "9100",
        ])
        .unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        let mut config = LimeConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.transport, TransportKind::Http);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["limeai", "doctor", "--plain", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Doctor { plain: true })));
    }

    #[test]
    fn defaults_render_without_error() {
        assert!(print_config(&LimeConfig::default()).is_ok());
    }
}
