//! Currency definition types
//!
//! A `CurrencyDefinition` carries the display rules of one currency: the
//! decorations placed around the number, the two separators and the number of
//! fractional digits. Definitions are created once by the registry and never
//! mutated afterwards.

/// Display rules for a single currency
///
/// Fields are private so a definition handed out by the registry cannot be
/// altered; use the accessors to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDefinition {
    code: String,
    prefix: String,
    suffix: String,
    thousands_separator: String,
    decimals_separator: String,
    decimals: u32,
    fallback: bool,
}

impl CurrencyDefinition {
    /// Create a definition for a known currency
    ///
    /// # Arguments
    ///
    /// * `code` - Currency code (stored uppercased and trimmed)
    /// * `prefix` - Symbol placed before the number
    /// * `suffix` - Text placed after the number
    /// * `thousands_separator` - Separator between integer digit groups
    /// * `decimals_separator` - Separator before the fractional digits
    /// * `decimals` - Number of fractional digits
    pub fn new(
        code: &str,
        prefix: &str,
        suffix: &str,
        thousands_separator: &str,
        decimals_separator: &str,
        decimals: u32,
    ) -> Self {
        CurrencyDefinition {
            code: normalize_code(code),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            thousands_separator: thousands_separator.to_string(),
            decimals_separator: decimals_separator.to_string(),
            decimals,
            fallback: false,
        }
    }

    /// Euro: `€ 1.000,46` / `1.000,46 Eur`
    pub fn eur() -> Self {
        CurrencyDefinition::new("EUR", "€", "Eur", ".", ",", 2)
    }

    /// US Dollar: `$ 1,000.46` / `1,000.46 Dollars`
    pub fn usd() -> Self {
        CurrencyDefinition::new("USD", "$", "Dollars", ",", ".", 2)
    }

    /// Neutral definition returned for codes the registry does not know
    ///
    /// It keeps the requested code for diagnostics but carries no display
    /// rules. A handle seeded from it leaves every display field unset.
    pub fn fallback(code: &str) -> Self {
        CurrencyDefinition {
            code: normalize_code(code),
            prefix: String::new(),
            suffix: String::new(),
            thousands_separator: String::new(),
            decimals_separator: String::new(),
            decimals: 0,
            fallback: true,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    pub fn decimals_separator(&self) -> &str {
        &self.decimals_separator
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Whether this is the neutral definition for an unknown code
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Normalize a currency code for lookups (trimmed, uppercase)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
