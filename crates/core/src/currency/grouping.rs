//! Locale digit grouping.

use raqam_shared::Locale;
use rust_decimal::Decimal;

/// Renders a non-negative amount with the locale's thousands separators.
///
/// The fractional part, if any, is kept as-is. The sign is ignored; callers
/// place it outside the currency marker.
#[must_use]
pub fn group_digits(amount: Decimal, locale: Locale) -> String {
    let rendered = amount.abs().to_string();
    match rendered.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_integer(integer, locale)),
        None => group_integer(&rendered, locale),
    }
}

fn group_integer(digits: &str, locale: Locale) -> String {
    let primary = locale.primary_group();
    if digits.len() <= primary {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - primary);
    let secondary = locale.secondary_group();

    let mut groups = Vec::with_capacity(head.len() / secondary + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(secondary);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    groups.join(&locale.separator().to_string())
}
