//! Digit-grouping locales for rupee amounts.

use serde::{Deserialize, Serialize};

/// Locale whose digit-grouping convention is applied to formatted amounts.
///
/// Both locales group the lowest three digits together. They differ in how
/// the remaining digits are grouped:
/// - `EnPk`: `10,000,000` (groups of three throughout)
/// - `EnIn`: `1,00,00,000` (groups of two above the first thousand)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// English (Pakistan).
    #[default]
    EnPk,
    /// English (India).
    EnIn,
}

impl Locale {
    /// Size of the lowest digit group.
    #[must_use]
    pub const fn primary_group(self) -> usize {
        3
    }

    /// Size of every digit group above the lowest one.
    #[must_use]
    pub const fn secondary_group(self) -> usize {
        match self {
            Self::EnPk => 3,
            Self::EnIn => 2,
        }
    }

    /// Thousands separator.
    #[must_use]
    pub const fn separator(self) -> char {
        ','
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnPk => write!(f, "en-PK"),
            Self::EnIn => write!(f, "en-IN"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en-pk" => Ok(Self::EnPk),
            "en-in" => Ok(Self::EnIn),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
