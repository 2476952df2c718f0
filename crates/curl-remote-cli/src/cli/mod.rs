//! CLI for the curl-remote request wrapper.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use curl_remote::config;

use commands::{run_check, run_send};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "curl-remote")]
#[command(about = "Send one validated GET or POST request and print the body", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Send data to a URL and print the response body.
    Send {
        /// Absolute http/https/ftp URL (without a query string for GET).
        url: String,

        /// Transfer method: get or post (case-insensitive).
        #[arg(short = 'X', long, default_value = "get")]
        method: String,

        /// User agent to send instead of the configured or built-in default.
        #[arg(short = 'A', long)]
        user_agent: Option<String>,

        /// KEY=VALUE pair; repeat for more fields.
        #[arg(short, long = "data", value_name = "KEY=VALUE", value_parser = parse_pair)]
        data: Vec<(String, String)>,
    },

    /// Check whether a URL would be accepted.
    Check {
        /// URL to validate.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Send {
                url,
                method,
                user_agent,
                data,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_send(&cfg, &url, &method, user_agent.as_deref(), &data)?;
            }
            CliCommand::Check { url } => run_check(&url)?,
        }

        Ok(())
    }
}

/// Splits `KEY=VALUE` at the first `=`. The value may be empty.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, _)) if k.is_empty() => Err(format!("missing key in {:?}", s)),
        Some((k, v)) => Ok((k.to_string(), v.to_string())),
        None => Err(format!("expected KEY=VALUE, got {:?}", s)),
    }
}
