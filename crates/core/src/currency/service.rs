//! Formatter bound to configured defaults.

use raqam_shared::{FormatConfig, Locale, Variant};
use rust_decimal::Decimal;

use super::error::FormatError;
use super::format::{format_compact, format_locale};
use super::parse::{parse, parse_strict};

/// Currency formatter carrying a locale and label variant.
///
/// Stateless apart from those two choices, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
    variant: Variant,
}

impl CurrencyFormatter {
    /// Creates a formatter with explicit choices.
    #[must_use]
    pub const fn new(locale: Locale, variant: Variant) -> Self {
        Self { locale, variant }
    }

    /// Returns the configured locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the configured variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Compact lakh/crore string using the configured variant.
    #[must_use]
    pub fn compact(&self, amount: Decimal) -> String {
        format_compact(amount, self.variant)
    }

    /// Full grouped amount using the configured locale.
    #[must_use]
    pub fn full(&self, amount: Decimal) -> String {
        format_locale(amount, self.locale)
    }

    /// Lenient parse; `0` for unreadable input.
    #[must_use]
    pub fn parse(&self, input: &str) -> Decimal {
        parse(input)
    }

    /// Strict parse.
    pub fn parse_strict(&self, input: &str) -> Result<Decimal, FormatError> {
        parse_strict(input)
    }
}

impl From<FormatConfig> for CurrencyFormatter {
    fn from(config: FormatConfig) -> Self {
        Self::new(config.locale, config.variant)
    }
}
