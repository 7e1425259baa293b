//! Configuration field names
//!
//! Identifies each of the seven values a [`CurrencyHandle`](crate::core::CurrencyHandle)
//! must hold before it can render. Errors carry a `ConfigField` so callers can
//! tell which part of the configuration was rejected or left out.

use std::fmt;

/// A required field of the formatter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Currency,
    Decimals,
    Prefix,
    Suffix,
    Value,
    ThousandsSeparator,
    DecimalsSeparator,
}

impl ConfigField {
    /// All fields in the order `format()` checks them
    pub const RENDER_ORDER: [ConfigField; 7] = [
        ConfigField::Currency,
        ConfigField::Decimals,
        ConfigField::Prefix,
        ConfigField::Suffix,
        ConfigField::Value,
        ConfigField::ThousandsSeparator,
        ConfigField::DecimalsSeparator,
    ];

    /// Field name as shown in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Currency => "currency",
            ConfigField::Decimals => "decimals",
            ConfigField::Prefix => "prefix",
            ConfigField::Suffix => "suffix",
            ConfigField::Value => "value",
            ConfigField::ThousandsSeparator => "thousands_separator",
            ConfigField::DecimalsSeparator => "decimals_separator",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
