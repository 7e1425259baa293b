//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `definition`: Currency display rules
//! - `field`: Names of the formatter's required configuration fields
//! - `error`: Error types for the currency formatter

pub mod definition;
pub mod error;
pub mod field;

pub use definition::CurrencyDefinition;
pub use error::FormatError;
pub use field::ConfigField;
