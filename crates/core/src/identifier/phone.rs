//! Pakistani phone number formatting.

use super::digits_of;

const COUNTRY_CODE: &str = "92";
const TRUNK_PREFIX: char = '0';
const OPERATOR_DIGITS: usize = 4;
const SUBSCRIBER_ONLY_DIGITS: usize = 10;

/// Formats a phone number as the user types.
///
/// | Digits                         | Result             |
/// |--------------------------------|--------------------|
/// | start with `92`                | `+923001234567`    |
/// | start with `0`                 | `0300-1234567`     |
/// | exactly 10, no leading `0`     | `0300-1234567`     |
/// | anything else                  | input, unchanged   |
///
/// The last row returns the original string, separators and letters
/// included.
///
/// ```
/// use raqam_core::identifier::format_phone;
///
/// assert_eq!(format_phone("03001234567"), "0300-1234567");
/// assert_eq!(format_phone("923001234567"), "+923001234567");
/// assert_eq!(format_phone("abc"), "abc");
/// ```
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits = digits_of(input);

    if digits.starts_with(COUNTRY_CODE) {
        return format!("+{digits}");
    }
    if digits.starts_with(TRUNK_PREFIX) {
        return hyphenate(&digits);
    }
    if digits.len() == SUBSCRIBER_ONLY_DIGITS {
        return hyphenate(&format!("{TRUNK_PREFIX}{digits}"));
    }

    input.to_string()
}

/// Inserts a hyphen after the operator code, once there is something after it.
fn hyphenate(digits: &str) -> String {
    if digits.len() <= OPERATOR_DIGITS {
        return digits.to_string();
    }
    let (operator, subscriber) = digits.split_at(OPERATOR_DIGITS);
    format!("{operator}-{subscriber}")
}
