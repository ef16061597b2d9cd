//! Common types used across the workspace.

pub mod locale;
pub mod variant;

pub use locale::Locale;
pub use variant::{Scale, Variant};
