//! Rupee formatting and parsing on the South-Asian numbering scale.

pub mod error;
pub mod format;
pub mod grouping;
pub mod parse;
pub mod service;

#[cfg(test)]
mod props;

pub use error::FormatError;
pub use format::{
    amount_from_f64, format_compact, format_currency, format_currency_compact, format_locale,
    scale_for,
};
pub use grouping::group_digits;
pub use parse::{parse, parse_strict};
pub use service::CurrencyFormatter;
