//! Rupee display formatting on the lakh/crore scale.
//!
//! Amounts are scaled on their magnitude:
//!
//! | Magnitude        | Divisor      | Label           |
//! |------------------|--------------|-----------------|
//! | `>= 10,000,000`  | 10,000,000   | `Cr`            |
//! | `>= 100,000`     | 100,000      | `Lac` / `L`     |
//! | `>= 1,000`       | 1,000        | `K`             |
//! | below            | -            | none            |
//!
//! The scaled value keeps one decimal unless it is already `>= 100`.

use raqam_shared::{Locale, Scale, Variant};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::error::FormatError;
use super::grouping::group_digits;

/// Plain-text currency marker.
pub const MARKER: &str = "Rs";

/// 1,000.
pub const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
/// 100,000.
pub const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
/// 10,000,000.
pub const CRORE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Fraction digits kept for amounts below one thousand, the same cap as a
/// default `en` number format.
const UNIT_DECIMALS: u32 = 3;

/// Returns the scale an amount is displayed at, based on its magnitude.
#[must_use]
pub fn scale_for(amount: Decimal) -> Scale {
    let magnitude = amount.abs();
    if magnitude >= CRORE {
        Scale::Crore
    } else if magnitude >= LAKH {
        Scale::Lakh
    } else if magnitude >= THOUSAND {
        Scale::Thousand
    } else {
        Scale::Unit
    }
}

/// Returns the divisor applied to an amount displayed at `scale`.
#[must_use]
pub const fn divisor(scale: Scale) -> Decimal {
    match scale {
        Scale::Unit => Decimal::ONE,
        Scale::Thousand => THOUSAND,
        Scale::Lakh => LAKH,
        Scale::Crore => CRORE,
    }
}

/// Decimal places shown for an already scaled value.
#[must_use]
pub fn decimals_for(scaled: Decimal) -> u32 {
    if scaled.abs() >= HUNDRED { 0 } else { 1 }
}

/// Formats an amount as a compact rupee string.
///
/// - `0` is always `Rs 0`
/// - the sign goes in front of the marker: `-Rs 1.5 Cr`
/// - scaled values round half away from zero
/// - amounts below 1,000 keep up to three fraction digits
///
/// # Example
///
/// ```
/// use raqam_core::currency::format_compact;
/// use raqam_shared::Variant;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_compact(Decimal::from(250_000), Variant::Standard), "Rs 2.5 Lac");
/// assert_eq!(format_compact(Decimal::from(250_000), Variant::Compact), "Rs 2.5L");
/// assert_eq!(format_compact(Decimal::from(-15_000_000), Variant::Standard), "-Rs 1.5 Cr");
/// ```
#[must_use]
pub fn format_compact(amount: Decimal, variant: Variant) -> String {
    if amount.is_zero() {
        return format!("{MARKER} 0");
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let magnitude = amount.abs();
    let scale = scale_for(magnitude);

    let digits = match scale {
        Scale::Unit => {
            let rounded = magnitude
                .round_dp_with_strategy(UNIT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            group_digits(rounded, Locale::default())
        }
        Scale::Thousand | Scale::Lakh | Scale::Crore => {
            let scaled = magnitude / divisor(scale);
            let decimals = decimals_for(scaled);
            let rounded =
                scaled.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.prec$}", prec = decimals as usize)
        }
    };

    format!("{sign}{MARKER} {digits}{}", variant.suffix(scale))
}

/// Formats with verbose labels (`Lac`, spaced `Cr`).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format_compact(amount, Variant::Standard)
}

/// Formats with short labels (`L`, `Cr`).
#[must_use]
pub fn format_currency_compact(amount: Decimal) -> String {
    format_compact(amount, Variant::Compact)
}

/// Formats the full amount with the locale's digit grouping and no scale
/// label, rounded to whole rupees.
///
/// ```
/// use raqam_core::currency::format_locale;
/// use raqam_shared::Locale;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_locale(Decimal::from(10_000_000), Locale::EnPk), "Rs 10,000,000");
/// assert_eq!(format_locale(Decimal::from(10_000_000), Locale::EnIn), "Rs 1,00,00,000");
/// ```
#[must_use]
pub fn format_locale(amount: Decimal, locale: Locale) -> String {
    if amount.is_zero() {
        return format!("{MARKER} 0");
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let rounded = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    format!("{sign}{MARKER} {}", group_digits(rounded, locale))
}

/// Converts a float amount, rejecting `NaN` and infinities.
///
/// Formatting only accepts `Decimal`, so this is the single place a
/// non-finite number can be turned away.
pub fn amount_from_f64(value: f64) -> Result<Decimal, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite);
    }
    Decimal::from_f64(value).ok_or_else(|| FormatError::Overflow(value.to_string()))
}
