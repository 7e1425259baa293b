use crate::core::number_format::MAX_DECIMALS;
use crate::core::FormatOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Format and parse currency strings
#[derive(Parser, Debug)]
#[command(name = "currency-fmt")]
#[command(about = "Format numbers as currency strings and parse them back", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a single value
    Format(FormatArgs),

    /// Parse a formatted currency string into a number
    Parse {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },

    /// Format every row of a CSV file (columns: amount,currency[,prefix,suffix,decimals,...])
    Batch {
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,
    },

    /// List the registered currency codes
    Currencies,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Value to format
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Currency code (case-insensitive)
    #[arg(short, long, value_name = "CODE")]
    pub currency: String,

    /// Text placed before the number
    #[arg(long, value_name = "PREFIX", conflicts_with = "suffix")]
    pub prefix: Option<String>,

    /// Text placed after the number
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Number of fractional digits
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DECIMALS))
    )]
    pub decimals: Option<u32>,

    /// Separator between groups of three integer digits
    #[arg(long, value_name = "SEP")]
    pub thousands_separator: Option<String>,

    /// Separator before the fractional digits
    #[arg(long, value_name = "SEP")]
    pub decimals_separator: Option<String>,
}

impl FormatArgs {
    /// Collect the display overrides given on the command line
    pub fn to_overrides(&self) -> FormatOverrides {
        FormatOverrides {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            decimals: self.decimals,
            thousands_separator: self.thousands_separator.clone(),
            decimals_separator: self.decimals_separator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn format_args(args: &[&str]) -> FormatArgs {
        match CliArgs::try_parse_from(args).unwrap().command {
            Command::Format(format) => format,
            other => panic!("Expected format command, got {:?}", other),
        }
    }

    #[test]
    fn test_format_minimal() {
        let parsed = format_args(&["program", "format", "1000.456", "--currency", "EUR"]);

        assert_eq!(parsed.value, 1000.456);
        assert_eq!(parsed.currency, "EUR");
        assert_eq!(parsed.to_overrides(), FormatOverrides::default());
    }

    #[test]
    fn test_format_all_options() {
        let parsed = format_args(&[
            "program",
            "format",
            "-1234.5",
            "-c",
            "gbp",
            "--suffix",
            "GBP",
            "-d",
            "3",
            "--thousands-separator",
            ",",
            "--decimals-separator",
            ".",
        ]);

        assert_eq!(parsed.value, -1234.5);
        assert_eq!(
            parsed.to_overrides(),
            FormatOverrides {
                prefix: None,
                suffix: Some("GBP".to_string()),
                decimals: Some(3),
                thousands_separator: Some(",".to_string()),
                decimals_separator: Some(".".to_string()),
            }
        );
    }

    #[test]
    fn test_format_accepts_nan_for_later_validation() {
        let parsed = format_args(&["program", "format", "NaN", "--currency", "EUR"]);
        assert!(parsed.value.is_nan());
    }

    #[test]
    fn test_format_accepts_max_decimals() {
        let parsed = format_args(&["program", "format", "10", "-c", "EUR", "-d", "28"]);
        assert_eq!(parsed.decimals, Some(28));
    }

    #[rstest]
    #[case::parse(&["program", "parse", "1.234,56"])]
    #[case::parse_negative(&["program", "parse", "-1,000"])]
    #[case::batch(&["program", "batch", "input.csv"])]
    #[case::currencies(&["program", "currencies"])]
    fn test_other_commands(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_ok());
    }

    // Error handling tests
    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::missing_currency(&["program", "format", "10"])]
    #[case::non_numeric_value(&["program", "format", "ten", "--currency", "EUR"])]
    #[case::prefix_and_suffix(&["program", "format", "10", "-c", "EUR", "--prefix", "€", "--suffix", "Eur"])]
    #[case::negative_decimals(&["program", "format", "10", "-c", "EUR", "-d", "-1"])]
    #[case::too_many_decimals(&["program", "format", "10", "-c", "EUR", "-d", "29"])]
    #[case::u32_max_decimals(&["program", "format", "10", "-c", "EUR", "-d", "4294967295"])]
    #[case::batch_missing_input(&["program", "batch"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
