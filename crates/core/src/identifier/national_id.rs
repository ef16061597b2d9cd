//! CNIC formatting: `AAAAA-BBBBBBB-C`.

use super::digits_of;

/// Number of digits in a complete CNIC.
pub const NATIONAL_ID_DIGITS: usize = 13;

const REGION_DIGITS: usize = 5;
const SERIAL_END: usize = 12;

/// Formats a (possibly partial) CNIC as the user types.
///
/// Non-digits are dropped, hyphens are inserted once the corresponding
/// group has started, and anything past the 13th digit is cut off.
///
/// ```
/// use raqam_core::identifier::format_national_id;
///
/// assert_eq!(format_national_id("4210112345671"), "42101-1234567-1");
/// assert_eq!(format_national_id("421011"), "42101-1");
/// assert_eq!(format_national_id("4210"), "4210");
/// ```
#[must_use]
pub fn format_national_id(input: &str) -> String {
    let digits = digits_of(input);
    match digits.len() {
        0..=REGION_DIGITS => digits,
        len if len <= SERIAL_END => {
            format!("{}-{}", &digits[..REGION_DIGITS], &digits[REGION_DIGITS..])
        }
        _ => format!(
            "{}-{}-{}",
            &digits[..REGION_DIGITS],
            &digits[REGION_DIGITS..SERIAL_END],
            &digits[SERIAL_END..NATIONAL_ID_DIGITS]
        ),
    }
}

/// Returns true when `input` holds exactly the 13 digits of a CNIC,
/// with or without hyphens.
#[must_use]
pub fn is_complete_national_id(input: &str) -> bool {
    digits_of(input).len() == NATIONAL_ID_DIGITS
}
