//! Subcommand execution.

use std::io::Write;

use raqam_core::CurrencyFormatter;
use raqam_core::currency::{format_compact, format_locale};
use raqam_core::identifier::{format_national_id, format_phone, is_complete_national_id};
use raqam_shared::{AppError, AppResult};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::cli::Command;

/// Result of one subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Subcommand name.
    pub command: &'static str,
    /// Input as given on the command line.
    pub input: String,
    /// Formatted or parsed value.
    pub output: String,
}

impl Outcome {
    /// Renders the outcome as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "command": self.command,
            "input": self.input,
            "output": self.output,
        })
    }

    /// Writes the outcome as one line, plain or JSON.
    pub fn write_to(&self, out: &mut impl Write, json: bool) -> AppResult<()> {
        let written = if json {
            writeln!(out, "{}", self.to_json())
        } else {
            writeln!(out, "{}", self.output)
        };
        written.map_err(|err| AppError::Internal(format!("failed to write result: {err}")))
    }
}

/// Runs a subcommand against the configured formatter.
pub fn execute(command: &Command, formatter: &CurrencyFormatter) -> AppResult<Outcome> {
    let outcome = match command {
        Command::Compact { amount, variant } => Outcome {
            command: "compact",
            input: amount.to_string(),
            output: format_compact(*amount, variant.unwrap_or(formatter.variant())),
        },
        Command::Locale { amount, locale } => Outcome {
            command: "locale",
            input: amount.to_string(),
            output: format_locale(*amount, locale.unwrap_or(formatter.locale())),
        },
        Command::Parse { display, strict } => {
            let amount = if *strict {
                formatter.parse_strict(display)?
            } else {
                formatter.parse(display)
            };
            Outcome {
                command: "parse",
                input: display.clone(),
                output: amount.normalize().to_string(),
            }
        }
        Command::Cnic { input } => {
            if !is_complete_national_id(input) {
                debug!(input = %input, "partial CNIC");
            }
            Outcome {
                command: "cnic",
                input: input.clone(),
                output: format_national_id(input),
            }
        }
        Command::Phone { input } => {
            let output = format_phone(input);
            if output == *input {
                warn!(input = %input, "unrecognized phone number shape, left unchanged");
            }
            Outcome {
                command: "phone",
                input: input.clone(),
                output,
            }
        }
    };

    Ok(outcome)
}
