//! Label variants for scaled amounts.

use serde::{Deserialize, Serialize};

/// Unit magnitude an amount is scaled to before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// No scaling, raw amount.
    Unit,
    /// 1,000.
    Thousand,
    /// 100,000.
    Lakh,
    /// 10,000,000.
    Crore,
}

/// Spelling of the scale labels in a compact amount.
///
/// | Scale    | `Standard`  | `Compact` |
/// |----------|-------------|-----------|
/// | thousand | `1.5K`      | `1.5K`    |
/// | lakh     | `2.5 Lac`   | `2.5L`    |
/// | crore    | `1.5 Cr`    | `1.5Cr`   |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Verbose labels, used in tables and cards.
    #[default]
    Standard,
    /// Short labels, used in charts and tight columns.
    Compact,
}

impl Variant {
    /// Returns the suffix appended after the scaled digits, including any
    /// leading space.
    #[must_use]
    pub const fn suffix(self, scale: Scale) -> &'static str {
        match (self, scale) {
            (_, Scale::Unit) => "",
            (_, Scale::Thousand) => "K",
            (Self::Standard, Scale::Lakh) => " Lac",
            (Self::Compact, Scale::Lakh) => "L",
            (Self::Standard, Scale::Crore) => " Cr",
            (Self::Compact, Scale::Crore) => "Cr",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("Unknown variant: {s}")),
        }
    }
}
