//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the serialized report to standard output
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use domain_audit::initialization::init_logger_with;
use domain_audit::resolver::UdpExchange;
use domain_audit::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let exchange = UdpExchange::new(Duration::from_secs(config.timeout_seconds));
    let report = domain_audit::run(&config.domain, &config.resolver, &exchange).await;

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    println!("{json}");

    if report.error {
        process::exit(1);
    }
    Ok(())
}
