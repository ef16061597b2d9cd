//! Property-based tests for compact currency formatting.
//!
//! - Suffix follows the magnitude band
//! - Negation is a pure `-` prefix
//! - Precision switches to whole numbers at a scaled value of 100
//! - Parsing the output lands within the rounding tolerance

use proptest::prelude::*;
use raqam_shared::{Scale, Variant};
use rust_decimal::Decimal;

use super::format::{decimals_for, divisor, format_compact, scale_for};
use super::parse::parse;

/// Strategy to generate positive amounts in paisa (0.01 to 10,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2))
}

/// Strategy to generate whole-rupee amounts of at least one thousand.
fn scaled_amount() -> impl Strategy<Value = Decimal> {
    (1_000i64..100_000_000_000i64).prop_map(Decimal::from)
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Standard), Just(Variant::Compact)]
}

/// Extracts the digits between the marker and the suffix.
fn numeric_part(formatted: &str, variant: Variant, scale: Scale) -> String {
    let unsigned = formatted.strip_prefix('-').unwrap_or(formatted);
    let body = unsigned.strip_prefix("Rs ").unwrap_or(unsigned);
    body.strip_suffix(variant.suffix(scale))
        .unwrap_or(body)
        .to_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The suffix is chosen by magnitude alone.
    #[test]
    fn prop_suffix_matches_band(amount in positive_amount(), variant in variant_strategy()) {
        let formatted = format_compact(amount, variant);
        let scale = scale_for(amount);

        match scale {
            Scale::Crore => prop_assert!(formatted.ends_with("Cr"), "{}", formatted),
            Scale::Lakh => prop_assert!(
                formatted.ends_with("Lac") || formatted.ends_with('L'),
                "{}",
                formatted
            ),
            Scale::Thousand => prop_assert!(formatted.ends_with('K'), "{}", formatted),
            Scale::Unit => prop_assert!(
                formatted.ends_with(|c: char| c.is_ascii_digit()),
                "{}",
                formatted
            ),
        }
        prop_assert!(formatted.starts_with("Rs "));
    }

    /// Formatting a negated amount only adds a leading `-`.
    #[test]
    fn prop_negation_is_prefix(amount in positive_amount(), variant in variant_strategy()) {
        let positive = format_compact(amount, variant);
        let negative = format_compact(-amount, variant);
        prop_assert_eq!(negative, format!("-{positive}"));
    }

    /// Zero decimals iff the scaled value is at least 100, otherwise one.
    #[test]
    fn prop_precision_switch(amount in scaled_amount(), variant in variant_strategy()) {
        let scale = scale_for(amount);
        let scaled = amount / divisor(scale);
        let formatted = format_compact(amount, variant);
        let digits = numeric_part(&formatted, variant, scale);

        if scaled >= Decimal::from(100) {
            prop_assert_eq!(decimals_for(scaled), 0);
            prop_assert!(!digits.contains('.'), "{}", formatted);
        } else {
            prop_assert_eq!(decimals_for(scaled), 1);
            let fraction = digits.split_once('.').map(|(_, f)| f.len());
            prop_assert_eq!(fraction, Some(1), "{}", formatted);
        }
    }

    /// Parsing the output recovers the amount to within half the last
    /// displayed digit.
    #[test]
    fn prop_parse_within_rounding_tolerance(amount in scaled_amount(), variant in variant_strategy()) {
        let scale = scale_for(amount);
        let scaled = amount / divisor(scale);
        let step = divisor(scale) / Decimal::from(10u32.pow(decimals_for(scaled)));
        let tolerance = step / Decimal::from(2);

        let parsed = parse(&format_compact(amount, variant));
        prop_assert!(
            (parsed - amount).abs() <= tolerance,
            "amount {} parsed back as {} (tolerance {})",
            amount, parsed, tolerance
        );
    }

    /// Both variants agree on the numeric portion.
    #[test]
    fn prop_variants_share_digits(amount in positive_amount()) {
        let scale = scale_for(amount);
        let standard = format_compact(amount, Variant::Standard);
        let compact = format_compact(amount, Variant::Compact);
        prop_assert_eq!(
            numeric_part(&standard, Variant::Standard, scale),
            numeric_part(&compact, Variant::Compact, scale)
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Zero renders identically in every variant.
    #[test]
    fn test_zero_is_rs_0() {
        assert_eq!(format_compact(Decimal::ZERO, Variant::Standard), "Rs 0");
        assert_eq!(format_compact(Decimal::ZERO, Variant::Compact), "Rs 0");
    }

    /// 12,345,678 is 1.23 crore, shown at one decimal as `Rs 1.2 Cr`, so the
    /// round trip lands on 12,000,000 rather than the amount formatted.
    #[test]
    fn test_round_trip_is_lossy() {
        let amount = dec!(12345678);
        let formatted = format_compact(amount, Variant::Standard);
        assert_eq!(formatted, "Rs 1.2 Cr");

        let parsed = parse(&formatted);
        assert_eq!(parsed, dec!(12000000));
        assert_ne!(parsed, amount);
        assert!((parsed - amount).abs() <= dec!(500000));
    }

    /// A scaled value of 15 stays below 100, so one decimal is kept.
    #[test]
    fn test_fifteen_crore_keeps_one_decimal() {
        assert_eq!(format_compact(dec!(150000000), Variant::Standard), "Rs 15.0 Cr");
        assert_eq!(format_compact(dec!(150000000), Variant::Compact), "Rs 15.0Cr");
    }

    #[test]
    fn test_round_trip_at_two_digit_crore() {
        let parsed = parse(&format_compact(dec!(123456789), Variant::Standard));
        assert!(parsed >= dec!(123000000) && parsed <= dec!(124000000));
    }
}
