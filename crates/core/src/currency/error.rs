//! Currency formatting error types.

use raqam_shared::AppError;
use thiserror::Error;

/// Errors raised by the strict entry points of the formatter.
///
/// The lenient functions (`format_compact`, `parse`) never surface these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A float amount was `NaN` or infinite.
    #[error("Amount is not a finite number")]
    NonFinite,

    /// Nothing left to parse after stripping the marker and separators.
    #[error("Display string is empty")]
    Empty,

    /// The numeric portion is not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidNumber(String),

    /// The amount does not fit in a `Decimal` once scaled.
    #[error("Amount out of range: {0}")]
    Overflow(String),
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::NonFinite => Self::Validation(err.to_string()),
            FormatError::Empty | FormatError::InvalidNumber(_) | FormatError::Overflow(_) => {
                Self::Parse(err.to_string())
            }
        }
    }
}
