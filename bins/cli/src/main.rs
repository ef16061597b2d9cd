//! Raqam command-line front-end.
//!
//! Usage:
//!   raqam compact 250000 [--variant standard|compact]
//!   raqam locale 10000000 [--locale en-pk|en-in]
//!   raqam parse "Rs 1.5 Cr" [--strict]
//!   raqam cnic 4210112345671
//!   raqam phone 03001234567

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use raqam_core::CurrencyFormatter;
use raqam_shared::{AppConfig, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::execute;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raqam=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;
    let formatter = CurrencyFormatter::from(config.format);
    info!(
        locale = %formatter.locale(),
        variant = %formatter.variant(),
        "Formatter configured"
    );

    let outcome = execute(&cli.command, &formatter)?;
    outcome.write_to(&mut std::io::stdout().lock(), cli.json)?;

    Ok(())
}
