//! Currency registry
//!
//! Maps currency codes to definition constructors. Resolution is a plain table
//! lookup on the normalized code; unknown codes fall back to the neutral
//! definition instead of failing.

use crate::core::traits::CurrencyResolver;
use crate::types::definition::normalize_code;
use crate::types::CurrencyDefinition;
use std::collections::HashMap;
use tracing::debug;

/// Constructor for a currency definition
pub type DefinitionFactory = fn() -> CurrencyDefinition;

/// Registry of known currencies
///
/// # Examples
///
/// ```
/// use currency_formatter::core::{CurrencyRegistry, CurrencyResolver};
///
/// let registry = CurrencyRegistry::new();
/// assert_eq!(registry.resolve("eur").prefix(), "€");
/// assert!(registry.resolve("XYZ").is_fallback());
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    factories: HashMap<String, DefinitionFactory>,
}

impl CurrencyRegistry {
    /// Create a registry with the built-in currencies (EUR, USD)
    pub fn new() -> Self {
        let mut registry = CurrencyRegistry::empty();
        registry.register("EUR", CurrencyDefinition::eur);
        registry.register("USD", CurrencyDefinition::usd);
        registry
    }

    /// Create a registry with no currencies
    pub fn empty() -> Self {
        CurrencyRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the constructor for a currency code
    pub fn register(&mut self, code: &str, factory: DefinitionFactory) -> &mut Self {
        let code = normalize_code(code);
        debug!(code = %code, "Registering currency");
        self.factories.insert(code, factory);
        self
    }

    /// Whether a code has a registered definition
    pub fn contains(&self, code: &str) -> bool {
        self.factories.contains_key(&normalize_code(code))
    }

    /// Registered codes in alphabetical order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyResolver for CurrencyRegistry {
    fn resolve(&self, code: &str) -> CurrencyDefinition {
        let normalized = normalize_code(code);
        match self.factories.get(&normalized) {
            Some(factory) => factory(),
            None => {
                debug!(code = %normalized, "Unknown currency, using unformatted definition");
                CurrencyDefinition::fallback(&normalized)
            }
        }
    }
}
