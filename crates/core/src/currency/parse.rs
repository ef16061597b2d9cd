//! Reading compact rupee strings back into amounts.
//!
//! Parsing is lossy: `Rs 1.2 Cr` becomes `12,000,000` no matter which amount
//! was formatted to produce it.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::error::FormatError;
use super::format::{CRORE, LAKH, MARKER, THOUSAND};

/// Scale labels in match order, with their multipliers.
const SUFFIXES: [(&str, Decimal); 4] = [("Cr", CRORE), ("Lac", LAKH), ("L", LAKH), ("K", THOUSAND)];

/// Parses a display string, returning `0` for anything unreadable.
///
/// Accepts the output of `format_compact` and `format_locale`, plus bare
/// numbers. Suffix matching is case-sensitive.
///
/// ```
/// use raqam_core::currency::parse;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse("Rs 2.5 Lac"), Decimal::from(250_000));
/// assert_eq!(parse("-Rs 1.5Cr"), Decimal::from(-15_000_000));
/// assert_eq!(parse("Rs 10,000,000"), Decimal::from(10_000_000));
/// assert_eq!(parse("not money"), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse(input: &str) -> Decimal {
    parse_strict(input).unwrap_or_else(|err| {
        debug!(input, error = %err, "falling back to zero for unparseable amount");
        Decimal::ZERO
    })
}

/// Parses a display string, reporting why it could not be read.
///
/// The numeric portion must be a plain decimal: digit-group underscores
/// and exponents are rejected.
pub fn parse_strict(input: &str) -> Result<Decimal, FormatError> {
    let cleaned: String = input
        .replace(MARKER, "")
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(FormatError::Empty);
    }

    let (number, multiplier) = split_suffix(&cleaned);
    if !is_plain_decimal(number) {
        return Err(FormatError::InvalidNumber(input.to_string()));
    }
    let value =
        Decimal::from_str(number).map_err(|_| FormatError::InvalidNumber(input.to_string()))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| FormatError::Overflow(input.to_string()))
}

/// Optional sign, then digits and at most one decimal point. Rejects the
/// underscores and exponents `Decimal::from_str` would otherwise accept.
fn is_plain_decimal(number: &str) -> bool {
    let unsigned = number.strip_prefix(['-', '+']).unwrap_or(number);
    unsigned.bytes().any(|b| b.is_ascii_digit())
        && unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && unsigned.bytes().filter(|b| *b == b'.').count() <= 1
}

fn split_suffix(cleaned: &str) -> (&str, Decimal) {
    SUFFIXES
        .iter()
        .find_map(|(suffix, multiplier)| {
            cleaned
                .strip_suffix(suffix)
                .map(|number| (number, *multiplier))
        })
        .unwrap_or((cleaned, Decimal::ONE))
}
