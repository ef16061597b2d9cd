//! Live formatting for identifiers typed into forms.
//!
//! Identifiers are digit strings, not numbers: leading zeros matter and no
//! arithmetic is ever done on them.

pub mod national_id;
pub mod phone;

#[cfg(test)]
mod props;

pub use national_id::{format_national_id, is_complete_national_id};
pub use phone::format_phone;

/// Keeps only the ASCII digits of `input`.
pub(crate) fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
