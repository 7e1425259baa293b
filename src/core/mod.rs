//! Core business logic module
//!
//! This module contains the formatting components:
//! - `traits` - Resolver abstraction between formatter and registry
//! - `registry` - Currency code to definition lookup
//! - `number_format` - Rounding and digit grouping
//! - `formatter` - Currency selection and the fluent formatting handle
//! - `parser` - Recovery of numbers from formatted strings

pub mod formatter;
pub mod number_format;
pub mod parser;
pub mod registry;
pub mod traits;

pub use formatter::{CurrencyFormatter, CurrencyHandle, FormatOverrides};
pub use parser::parse_to_number;
pub use registry::{CurrencyRegistry, DefinitionFactory};
pub use traits::CurrencyResolver;
