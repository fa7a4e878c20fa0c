//! Command-line interface for axolgo
//!
//! Assembles the `aws` / `gcp` / `cryptography` command tree, resolves the
//! configuration once and dispatches to the invoked leaf command.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

use crate::config;

mod aws;
mod cryptography;
mod gcp;

/// Toolkit for AWS, GCP and day-to-day cryptography chores
#[derive(Parser)]
#[command(name = "axolgo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding axolgo configuration files. Defaults to the
    /// AXOLGO_CONFIG_PATH environment variable, then ./config
    #[arg(long, global = true, value_name = "DIR")]
    config_path: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Amazon Web Services operations
    Aws(aws::AwsArgs),

    /// Google Cloud Platform operations
    Gcp(gcp::GcpArgs),

    /// Cryptography utilities
    Cryptography(cryptography::CryptographyArgs),
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire the verbose flag to the tracing log level. RUST_LOG in the
    // environment always takes precedence; --verbose falls back to DEBUG.
    // The filter is reloadable so the configured verbosity can raise it
    // once the configuration has been read.
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let (filter, reload_handle) = reload::Layer::new(filter);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = config::resolve(cli.config_path.as_deref())?;

    if config.logging.verbosity > 0 {
        let level = if config.logging.verbosity == 1 { Level::DEBUG } else { Level::TRACE };
        let filter = EnvFilter::from_default_env().add_directive(level.into());
        if let Err(err) = reload_handle.reload(filter) {
            tracing::warn!("failed to apply configured verbosity: {err}");
        }
    }

    match cli.command {
        Commands::Aws(args) => aws::run(args, &config).await,
        Commands::Gcp(args) => gcp::run(args, &config).await,
        Commands::Cryptography(args) => cryptography::run(args).await,
    }
}
