//! Core traits for currency resolution
//!
//! The formatter depends on this trait rather than on the registry type, so
//! new currencies (or a whole new lookup source) plug in without touching the
//! formatter.

use crate::types::CurrencyDefinition;

/// Trait for resolving a currency code to its display rules
///
/// Implementations must never fail: codes they do not recognise resolve to
/// [`CurrencyDefinition::fallback`].
pub trait CurrencyResolver {
    /// Resolve a (case-insensitive) currency code
    fn resolve(&self, code: &str) -> CurrencyDefinition;
}
