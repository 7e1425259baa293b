//! Formatted-string parsing
//!
//! Recovers a number from a currency string without knowing its separators.
//! The right-most of `,` and `.` is taken as the decimals separator; every
//! other non-digit character (symbols, spaces, group separators, signs) is
//! dropped.
//!
//! A string with a single separator and no fraction is ambiguous: `"1,234"`
//! parses as `1.234`, not `1234`.

/// Parse a formatted currency string into a number
///
/// Strings without any digit parse to `0`.
///
/// # Examples
///
/// ```
/// use currency_formatter::core::parse_to_number;
///
/// assert_eq!(parse_to_number("€ 1.234,56"), 1234.56);
/// assert_eq!(parse_to_number("1,234.56 Dollars"), 1234.56);
/// assert_eq!(parse_to_number("1234"), 1234.0);
/// ```
pub fn parse_to_number(text: &str) -> f64 {
    // None orders before Some, so a lone separator always wins
    let separator = text.rfind(',').max(text.rfind('.'));

    let normalized = match separator {
        None => digits_only(text),
        Some(idx) => format!(
            "{}.{}",
            digits_only(&text[..idx]),
            digits_only(&text[idx + 1..])
        ),
    };

    normalized.parse::<f64>().unwrap_or(0.0)
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
