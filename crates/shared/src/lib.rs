//! Shared types, errors, and configuration for Raqam.
//!
//! This crate provides common types used across all other crates:
//! - Locale and label variants for formatted amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, FormatConfig};
pub use error::{AppError, AppResult};
pub use types::{Locale, Scale, Variant};
