//! Error types for the currency formatter
//!
//! This module defines all error types that can occur while configuring a
//! formatter handle, rendering it, or running a batch over a CSV file.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: Missing arguments, rejected values, incomplete handles
//! - **File I/O Errors**: Input file not found, output not writable
//! - **CSV Errors**: Malformed batch input

use crate::types::field::ConfigField;
use thiserror::Error;

/// Main error type for the currency formatter
///
/// Configuration errors are raised at the point of violation; only
/// `IncompleteConfiguration` waits until render time, because that is the
/// first point at which a missing field can be detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A required argument was absent
    #[error("Missing argument: {field}")]
    MissingArgument {
        /// The field the argument was meant for
        field: ConfigField,
    },

    /// The value is not a representable number (NaN, infinity, out of range)
    #[error("Invalid value '{value}': expected a finite number")]
    InvalidValue {
        /// Text of the rejected value
        value: String,
    },

    /// Rendering was requested before every required field was set
    #[error("Incomplete configuration: {field} is not set")]
    IncompleteConfiguration {
        /// The first unset field, in render-check order
        field: ConfigField,
    },

    /// I/O error while reading batch input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV error in batch input or output
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for FormatError {
    fn from(error: std::io::Error) -> Self {
        FormatError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for FormatError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        FormatError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl FormatError {
    /// Create a MissingArgument error
    pub fn missing_argument(field: ConfigField) -> Self {
        FormatError::MissingArgument { field }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(value: impl ToString) -> Self {
        FormatError::InvalidValue {
            value: value.to_string(),
        }
    }

    /// Create an IncompleteConfiguration error
    pub fn incomplete(field: ConfigField) -> Self {
        FormatError::IncompleteConfiguration { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_argument(
        FormatError::MissingArgument { field: ConfigField::Prefix },
        "Missing argument: prefix"
    )]
    #[case::invalid_value(
        FormatError::InvalidValue { value: "NaN".to_string() },
        "Invalid value 'NaN': expected a finite number"
    )]
    #[case::incomplete(
        FormatError::IncompleteConfiguration { field: ConfigField::ThousandsSeparator },
        "Incomplete configuration: thousands_separator is not set"
    )]
    #[case::io_error(
        FormatError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error_with_line(
        FormatError::CsvError { line: Some(7), message: "bad row".to_string() },
        "CSV error at line 7: bad row"
    )]
    #[case::csv_error_without_line(
        FormatError::CsvError { line: None, message: "bad row".to_string() },
        "CSV error: bad row"
    )]
    fn test_error_display(#[case] error: FormatError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::missing_argument(
        FormatError::missing_argument(ConfigField::Value),
        FormatError::MissingArgument { field: ConfigField::Value }
    )]
    #[case::invalid_value(
        FormatError::invalid_value(f64::INFINITY),
        FormatError::InvalidValue { value: "inf".to_string() }
    )]
    #[case::incomplete(
        FormatError::incomplete(ConfigField::Currency),
        FormatError::IncompleteConfiguration { field: ConfigField::Currency }
    )]
    fn test_helper_functions(#[case] result: FormatError, #[case] expected: FormatError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: FormatError = io_error.into();
        assert!(matches!(error, FormatError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: no such file");
    }
}
