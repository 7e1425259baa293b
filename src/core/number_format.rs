//! Number rendering
//!
//! Turns a decimal value into its digit string: half-up rounding to a fixed
//! number of fractional digits, three-digit grouping of the integer part, and
//! zero padding of the fraction. Decorations (prefix/suffix) are handled by
//! the formatter, not here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest fractional digit count accepted from text input (Decimal's max scale)
pub const MAX_DECIMALS: u32 = 28;

/// Round to `decimals` fractional digits, ties away from zero
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert `separator` between groups of three digits, most significant first
///
/// `digits` must contain ASCII digits only.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len());

    for (i, c) in digits.chars().enumerate() {
        grouped.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push_str(separator);
        }
    }

    grouped
}

/// Render a value with the given separators and fractional digit count
///
/// # Examples
///
/// ```
/// use currency_formatter::core::number_format::render_number;
/// use rust_decimal::Decimal;
///
/// let value = Decimal::new(1000456, 3); // 1000.456
/// assert_eq!(render_number(value, 2, ".", ","), "1.000,46");
/// assert_eq!(render_number(value, 0, ",", "."), "1,000");
/// ```
pub fn render_number(
    value: Decimal,
    decimals: u32,
    thousands_separator: &str,
    decimals_separator: &str,
) -> String {
    let rounded = round_half_up(value, decimals);
    // A value rounding to zero never renders as "-0"
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut rendered = String::new();
    if negative {
        rendered.push('-');
    }
    rendered.push_str(&group_thousands(integer, thousands_separator));

    if decimals > 0 {
        rendered.push_str(decimals_separator);
        rendered.push_str(fraction);
        for _ in fraction.len()..decimals as usize {
            rendered.push('0');
        }
    }

    rendered
}
