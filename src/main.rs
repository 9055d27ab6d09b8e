//! userbench - user CRUD backend with a concurrent bulk loader

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use userbench_rs::utils::logging::init_logging;
use userbench_rs::{Config, server};

#[derive(Debug, Parser)]
#[command(name = "userbench", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "USERBENCH_CONFIG",
        default_value = "config/userbench.yaml"
    )]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let (config, load_error) = Config::load_or_default(&cli.config).await;

    let config = match config.with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match load_error {
        None => info!("Configuration loaded from {}", cli.config.display()),
        Some(e) => warn!(
            "Configuration file {} not used, falling back to defaults: {}",
            cli.config.display(),
            e
        ),
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
