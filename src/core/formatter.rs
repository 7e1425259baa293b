//! Currency formatter and formatting handle
//!
//! [`CurrencyFormatter`] owns a resolver and hands out a fresh
//! [`CurrencyHandle`] per currency selection. The handle is an owned builder:
//! each mutator consumes it and returns it, so chains read left to right and
//! two handles can never share configuration.
//!
//! # Flow
//!
//! 1. `select_currency` resolves the code and seeds the handle from the
//!    definition (unknown codes leave the display fields unset)
//! 2. mutators override value, decorations, decimals and separators
//! 3. `format` checks all seven fields and renders
//!
//! ```
//! use currency_formatter::CurrencyFormatter;
//!
//! let formatter = CurrencyFormatter::new();
//! let text = formatter
//!     .select_currency("EUR")
//!     .set_value(1000.456)?
//!     .with_suffix("Eur")
//!     .format()?;
//! assert_eq!(text, "1.000,46 Eur");
//! # Ok::<(), currency_formatter::FormatError>(())
//! ```

use crate::core::number_format::render_number;
use crate::core::parser;
use crate::core::registry::CurrencyRegistry;
use crate::core::traits::CurrencyResolver;
use crate::types::{ConfigField, CurrencyDefinition, FormatError};
use rust_decimal::Decimal;
use std::fmt;
use tracing::trace;

/// Entry point for formatting: selects currencies and parses formatted text
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter<R = CurrencyRegistry> {
    resolver: R,
}

impl CurrencyFormatter {
    /// Create a formatter backed by the built-in registry
    pub fn new() -> Self {
        CurrencyFormatter {
            resolver: CurrencyRegistry::new(),
        }
    }

    /// Parse a formatted currency string back into a number
    ///
    /// Stateless; see [`parser::parse_to_number`].
    pub fn parse_to_number(text: &str) -> f64 {
        parser::parse_to_number(text)
    }
}

impl<R: CurrencyResolver> CurrencyFormatter<R> {
    /// Create a formatter backed by a custom resolver
    pub fn with_resolver(resolver: R) -> Self {
        CurrencyFormatter { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Start a new configuration for the given currency code
    ///
    /// Always returns a fresh handle; nothing carries over from previous
    /// selections.
    pub fn select_currency(&self, code: &str) -> CurrencyHandle {
        CurrencyHandle::new(self.resolver.resolve(code))
    }
}

/// Optional overrides applied to a handle in one step
///
/// Used where configuration comes from text (CSV rows, command line) and any
/// field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOverrides {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub decimals: Option<u32>,
    pub thousands_separator: Option<String>,
    pub decimals_separator: Option<String>,
}

/// In-progress formatting configuration
///
/// Prefix and suffix are mutually exclusive: setting one sets the other to
/// the empty string. An empty decoration still counts as set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyHandle {
    currency: Option<CurrencyDefinition>,
    value: Option<Decimal>,
    prefix: Option<String>,
    suffix: Option<String>,
    decimals: Option<u32>,
    thousands_separator: Option<String>,
    decimals_separator: Option<String>,
}

impl CurrencyHandle {
    /// Create a handle seeded from a definition
    ///
    /// A known definition seeds its prefix (the suffix starts cleared, as
    /// after `with_prefix`). A fallback definition seeds nothing: the caller
    /// must set decimals, a decoration and both separators before formatting.
    pub fn new(definition: CurrencyDefinition) -> Self {
        let mut handle = CurrencyHandle::default();

        if !definition.is_fallback() {
            handle.prefix = Some(definition.prefix().to_string());
            handle.suffix = Some(String::new());
            handle.decimals = Some(definition.decimals());
            handle.thousands_separator = Some(definition.thousands_separator().to_string());
            handle.decimals_separator = Some(definition.decimals_separator().to_string());
        }

        handle.currency = Some(definition);
        handle
    }

    /// Set the value to format
    ///
    /// Accepts anything convertible to a `Decimal` (integers, floats,
    /// decimals). NaN, infinities and floats beyond `Decimal`'s range are
    /// rejected with [`FormatError::InvalidValue`].
    pub fn set_value<V>(mut self, value: V) -> Result<Self, FormatError>
    where
        V: TryInto<Decimal> + fmt::Display + Copy,
    {
        let decimal = value
            .try_into()
            .map_err(|_| FormatError::invalid_value(value))?;
        self.value = Some(decimal);
        Ok(self)
    }

    /// Place `prefix` before the number and clear the suffix
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.trim().to_string());
        self.suffix = Some(String::new());
        self
    }

    /// Place `suffix` after the number and clear the prefix
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.trim().to_string());
        self.prefix = Some(String::new());
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_thousands_separator(mut self, separator: &str) -> Self {
        self.thousands_separator = Some(separator.trim().to_string());
        self
    }

    pub fn with_decimals_separator(mut self, separator: &str) -> Self {
        self.decimals_separator = Some(separator.trim().to_string());
        self
    }

    /// Apply every present override, in field order
    ///
    /// When both prefix and suffix are given, the suffix is applied last and
    /// wins.
    pub fn apply(mut self, overrides: &FormatOverrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            self = self.with_prefix(prefix);
        }
        if let Some(suffix) = &overrides.suffix {
            self = self.with_suffix(suffix);
        }
        if let Some(decimals) = overrides.decimals {
            self = self.with_decimals(decimals);
        }
        if let Some(separator) = &overrides.thousands_separator {
            self = self.with_thousands_separator(separator);
        }
        if let Some(separator) = &overrides.decimals_separator {
            self = self.with_decimals_separator(separator);
        }
        self
    }

    pub fn currency(&self) -> Option<&CurrencyDefinition> {
        self.currency.as_ref()
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    pub fn thousands_separator(&self) -> Option<&str> {
        self.thousands_separator.as_deref()
    }

    pub fn decimals_separator(&self) -> Option<&str> {
        self.decimals_separator.as_deref()
    }

    /// First unset field, in render-check order
    pub fn missing_field(&self) -> Option<ConfigField> {
        ConfigField::RENDER_ORDER
            .into_iter()
            .find(|field| !self.is_set(*field))
    }

    fn is_set(&self, field: ConfigField) -> bool {
        match field {
            ConfigField::Currency => self.currency.is_some(),
            ConfigField::Decimals => self.decimals.is_some(),
            ConfigField::Prefix => self.prefix.is_some(),
            ConfigField::Suffix => self.suffix.is_some(),
            ConfigField::Value => self.value.is_some(),
            ConfigField::ThousandsSeparator => self.thousands_separator.is_some(),
            ConfigField::DecimalsSeparator => self.decimals_separator.is_some(),
        }
    }

    /// Render the configured value
    ///
    /// # Errors
    ///
    /// [`FormatError::IncompleteConfiguration`] naming the first unset field.
    pub fn format(&self) -> Result<String, FormatError> {
        let (
            Some(currency),
            Some(decimals),
            Some(prefix),
            Some(suffix),
            Some(value),
            Some(thousands_separator),
            Some(decimals_separator),
        ) = (
            &self.currency,
            self.decimals,
            &self.prefix,
            &self.suffix,
            self.value,
            &self.thousands_separator,
            &self.decimals_separator,
        )
        else {
            return Err(FormatError::incomplete(
                self.missing_field().unwrap_or(ConfigField::Currency),
            ));
        };

        let number = render_number(value, decimals, thousands_separator, decimals_separator);
        let rendered = if !prefix.is_empty() {
            format!("{} {}", prefix, number)
        } else if !suffix.is_empty() {
            format!("{} {}", number, suffix)
        } else {
            number
        };

        trace!(currency = %currency.code(), %value, rendered = %rendered, "Formatted value");
        Ok(rendered)
    }

    /// Render, turning any error into its message text
    pub fn try_format(&self) -> Result<String, String> {
        self.format().map_err(|e| e.to_string())
    }
}

/// Displays the formatted value, or the error message if the handle is not
/// fully configured.
impl fmt::Display for CurrencyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_format() {
            Ok(text) | Err(text) => f.write_str(&text),
        }
    }
}
