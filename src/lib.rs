//! Currency Formatter Library
//! # Overview
//!
//! This library renders numbers as currency strings with per-currency
//! separators and an optional prefix or suffix, and parses such strings back
//! into numbers.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (CurrencyDefinition, ConfigField, FormatError)
//! - [`core`] - Formatting logic:
//!   - [`core::registry`] - Currency code to definition lookup
//!   - [`core::formatter`] - Currency selection and the fluent formatting handle
//!   - [`core::number_format`] - Rounding and digit grouping
//!   - [`core::parser`] - Formatted string to number
//! - [`io`] - CSV input/output for batch formatting
//! - [`batch`] - Batch orchestration
//! - [`cli`] - CLI arguments parsing
//!
//! # Example
//!
//! ```
//! use currency_formatter::CurrencyFormatter;
//!
//! let formatter = CurrencyFormatter::new();
//! let price = formatter.select_currency("USD").set_value(1000.456)?.with_prefix("$");
//! assert_eq!(price.format()?, "$ 1,000.46");
//! assert_eq!(CurrencyFormatter::parse_to_number("$ 1,000.46"), 1000.46);
//! # Ok::<(), currency_formatter::FormatError>(())
//! ```
//!
//! # Built-in Currencies
//!
//! - **EUR**: prefix `€`, suffix `Eur`, `1.000,46`
//! - **USD**: prefix `$`, suffix `Dollars`, `1,000.46`
//!
//! Other codes resolve to an empty definition; the caller then supplies every
//! display field before formatting.

// Module declarations
pub mod batch;
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use batch::{BatchFormatter, BatchSummary};
pub use crate::core::{
    parse_to_number, CurrencyFormatter, CurrencyHandle, CurrencyRegistry, CurrencyResolver,
    FormatOverrides,
};
pub use types::{ConfigField, CurrencyDefinition, FormatError};
