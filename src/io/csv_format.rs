//! CSV format handling for batch formatting
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to format requests
//! - Output serialization of formatted rows
//!
//! Input columns: `amount,currency` plus the optional
//! `prefix,suffix,decimals,thousands_separator,decimals_separator`.
//! Output columns: `amount,currency,formatted`.

use crate::core::number_format::MAX_DECIMALS;
use crate::core::{parse_to_number, FormatOverrides};
use crate::types::definition::normalize_code;
use crate::types::{ConfigField, FormatError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header of the batch output
pub const OUTPUT_HEADER: [&str; 3] = ["amount", "currency", "formatted"];

/// CSV record structure for deserialization
///
/// Every column is optional at this level so that a missing amount or
/// currency surfaces as a [`FormatError::MissingArgument`] instead of a
/// generic deserialization failure.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CsvRecord {
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub decimals: Option<u32>,
    pub thousands_separator: Option<String>,
    pub decimals_separator: Option<String>,
}

/// A validated batch row, ready to be formatted
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRequest {
    /// Amount as written in the input
    pub amount: String,
    /// Parsed amount
    pub value: Decimal,
    /// Normalized currency code
    pub currency: String,
    pub overrides: FormatOverrides,
}

/// Convert a CsvRecord to a FormatRequest
///
/// The amount is read as a plain decimal literal first; anything else is
/// recovered with [`parse_to_number`], so `1.234,56` and `$ 1,234.56` are
/// both accepted. An amount without any digit is rejected.
///
/// # Errors
///
/// - `MissingArgument` if the amount or currency is empty
/// - `InvalidValue` if the amount has no digits or is out of range, or if
///   `decimals` exceeds [`MAX_DECIMALS`]
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<FormatRequest, FormatError> {
    let amount = csv_record
        .amount
        .ok_or_else(|| FormatError::missing_argument(ConfigField::Value))?;
    let currency = csv_record
        .currency
        .ok_or_else(|| FormatError::missing_argument(ConfigField::Currency))?;

    let value = parse_amount(&amount)?;

    if let Some(decimals) = csv_record.decimals.filter(|d| *d > MAX_DECIMALS) {
        return Err(FormatError::invalid_value(decimals));
    }

    Ok(FormatRequest {
        amount,
        value,
        currency: normalize_code(&currency),
        overrides: FormatOverrides {
            prefix: csv_record.prefix,
            suffix: csv_record.suffix,
            decimals: csv_record.decimals,
            thousands_separator: csv_record.thousands_separator,
            decimals_separator: csv_record.decimals_separator,
        },
    })
}

/// Parse an amount cell into a Decimal
pub fn parse_amount(amount: &str) -> Result<Decimal, FormatError> {
    let amount = amount.trim();
    if let Ok(value) = Decimal::from_str(amount) {
        return Ok(value);
    }

    if !amount.chars().any(|c| c.is_ascii_digit()) {
        return Err(FormatError::invalid_value(amount));
    }

    let recovered = Decimal::try_from(parse_to_number(amount))
        .map_err(|_| FormatError::invalid_value(amount))?;

    // parse_to_number drops the sign along with the other non-digits
    if amount.starts_with('-') {
        Ok(-recovered)
    } else {
        Ok(recovered)
    }
}

/// CSV writer for formatted rows
///
/// The header is written on creation, so an input without valid rows still
/// produces a well-formed (header-only) output.
pub struct FormattedWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FormattedWriter<W> {
    pub fn new(output: W) -> Result<Self, FormatError> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(OUTPUT_HEADER)?;
        Ok(Self { writer })
    }

    /// Write one formatted row
    pub fn write_row(
        &mut self,
        request: &FormatRequest,
        formatted: &str,
    ) -> Result<(), FormatError> {
        self.writer
            .write_record([request.amount.as_str(), request.currency.as_str(), formatted])?;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<(), FormatError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(amount: Option<&str>, currency: Option<&str>) -> CsvRecord {
        CsvRecord {
            amount: amount.map(str::to_string),
            currency: currency.map(str::to_string),
            ..CsvRecord::default()
        }
    }

    #[rstest]
    #[case::plain("1000.456", Decimal::new(1000456, 3))]
    #[case::integer("1234", Decimal::new(1234, 0))]
    #[case::negative("-12.5", Decimal::new(-125, 1))]
    #[case::whitespace("  100.0  ", Decimal::new(1000, 1))]
    #[case::eur_formatted("1.234,56", Decimal::new(123456, 2))]
    #[case::usd_formatted("$ 1,234.56", Decimal::new(123456, 2))]
    #[case::negative_eur_formatted("-1.234,56", Decimal::new(-123456, 2))]
    #[case::negative_usd_formatted(" -1,234.56 ", Decimal::new(-123456, 2))]
    fn test_parse_amount(#[case] amount: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(amount).unwrap(), expected);
    }

    #[rstest]
    #[case::no_digits("abc")]
    #[case::separators_only(",.")]
    fn test_parse_amount_rejects_text_without_digits(#[case] amount: &str) {
        assert!(matches!(
            parse_amount(amount),
            Err(FormatError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_convert_csv_record_valid() {
        let csv_record = CsvRecord {
            amount: Some("1000.456".to_string()),
            currency: Some("eur".to_string()),
            prefix: Some("EURO".to_string()),
            decimals: Some(3),
            ..CsvRecord::default()
        };

        let request = convert_csv_record(csv_record).unwrap();

        assert_eq!(request.amount, "1000.456");
        assert_eq!(request.value, Decimal::new(1000456, 3));
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.overrides.prefix.as_deref(), Some("EURO"));
        assert_eq!(request.overrides.decimals, Some(3));
        assert_eq!(request.overrides.suffix, None);
    }

    #[rstest]
    #[case::missing_amount(record(None, Some("EUR")), FormatError::missing_argument(ConfigField::Value))]
    #[case::missing_currency(record(Some("10"), None), FormatError::missing_argument(ConfigField::Currency))]
    #[case::missing_both(record(None, None), FormatError::missing_argument(ConfigField::Value))]
    #[case::invalid_amount(record(Some("n/a"), Some("EUR")), FormatError::invalid_value("n/a"))]
    fn test_convert_csv_record_errors(#[case] csv_record: CsvRecord, #[case] expected: FormatError) {
        assert_eq!(convert_csv_record(csv_record).unwrap_err(), expected);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::max(MAX_DECIMALS)]
    fn test_convert_csv_record_accepts_bounded_decimals(#[case] decimals: u32) {
        let csv_record = CsvRecord {
            decimals: Some(decimals),
            ..record(Some("1"), Some("EUR"))
        };

        let request = convert_csv_record(csv_record).unwrap();
        assert_eq!(request.overrides.decimals, Some(decimals));
    }

    #[rstest]
    #[case::just_over(MAX_DECIMALS + 1)]
    #[case::u32_max(u32::MAX)]
    fn test_convert_csv_record_rejects_excessive_decimals(#[case] decimals: u32) {
        let csv_record = CsvRecord {
            decimals: Some(decimals),
            ..record(Some("1"), Some("EUR"))
        };

        assert_eq!(
            convert_csv_record(csv_record).unwrap_err(),
            FormatError::invalid_value(decimals)
        );
    }

    #[test]
    fn test_formatted_writer_quotes_separators() {
        let request = convert_csv_record(record(Some("1000.456"), Some("usd"))).unwrap();
        let mut output = Vec::new();

        let mut writer = FormattedWriter::new(&mut output).unwrap();
        writer.write_row(&request, "$ 1,000.46").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "amount,currency,formatted\n1000.456,USD,\"$ 1,000.46\"\n"
        );
    }

    #[test]
    fn test_formatted_writer_header_only() {
        let mut output = Vec::new();
        FormattedWriter::new(&mut output).unwrap().finish().unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "amount,currency,formatted\n");
    }
}
