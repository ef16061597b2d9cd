//! Core formatting logic for Raqam.
//!
//! This crate contains pure functions with ZERO I/O. Nothing here reads the
//! environment, touches the network, or keeps state between calls.
//!
//! # Modules
//!
//! - `currency` - Lakh/crore compact amounts, grouped full amounts, parsing
//! - `identifier` - CNIC and phone number formatting for live input

pub mod currency;
pub mod identifier;

pub use currency::{CurrencyFormatter, FormatError};
