//! Property-based tests for identifier formatting.

use proptest::prelude::*;

use super::{digits_of, format_national_id, format_phone};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Re-formatting formatted output changes nothing, so the formatter can
    /// run on every keystroke.
    #[test]
    fn prop_national_id_idempotent(input in "[0-9 -]{0,20}") {
        let once = format_national_id(&input);
        prop_assert_eq!(format_national_id(&once), once);
    }

    /// The output keeps the leading digits of the input, at most 13 of them.
    #[test]
    fn prop_national_id_keeps_digit_prefix(input in "[0-9a-z -]{0,24}") {
        let digits = digits_of(&input);
        let kept = digits_of(&format_national_id(&input));
        prop_assert!(kept.len() <= 13);
        prop_assert!(digits.starts_with(&kept));
    }

    #[test]
    fn prop_phone_idempotent(input in "[0-9+ ()a-z-]{0,16}") {
        let once = format_phone(&input);
        prop_assert_eq!(format_phone(&once), once);
    }

    /// Recognized numbers keep every digit they were given.
    #[test]
    fn prop_phone_preserves_digits(subscriber in "3[0-9]{9}") {
        let local = format!("0{subscriber}");
        prop_assert_eq!(digits_of(&format_phone(&local)), local.clone());
        prop_assert_eq!(digits_of(&format_phone(&subscriber)), local);
    }
}
