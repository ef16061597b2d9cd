//! Command-line arguments.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use raqam_core::currency::amount_from_f64;
use raqam_shared::{Locale, Variant};
use rust_decimal::Decimal;

/// Format and parse rupee amounts, CNICs, and phone numbers.
#[derive(Debug, Parser)]
#[command(name = "raqam", version, about)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compact lakh/crore string, e.g. `Rs 2.5 Lac`.
    Compact {
        /// Amount in rupees.
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
        /// Label spelling; defaults to the configured variant.
        #[arg(long)]
        variant: Option<Variant>,
    },
    /// Full grouped amount, e.g. `Rs 10,000,000`.
    Locale {
        /// Amount in rupees.
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
        /// Digit grouping; defaults to the configured locale.
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Read a display string back into an amount.
    Parse {
        /// Display string, e.g. `Rs 1.5 Cr`.
        #[arg(allow_hyphen_values = true)]
        display: String,
        /// Fail instead of returning 0 for unreadable input.
        #[arg(long)]
        strict: bool,
    },
    /// Format a CNIC as `AAAAA-BBBBBBB-C`.
    Cnic {
        /// Digits typed so far.
        input: String,
    },
    /// Format a phone number.
    Phone {
        /// Number as typed.
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

/// Reads an amount as a decimal, falling back to float notation such as
/// `1.5e7`. `NaN` and infinities are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    if let Ok(amount) = Decimal::from_str(raw) {
        return Ok(amount);
    }
    let value = f64::from_str(raw).map_err(|_| format!("not a number: {raw}"))?;
    amount_from_f64(value).map_err(|err| err.to_string())
}
