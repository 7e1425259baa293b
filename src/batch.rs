//! Batch formatting
//!
//! Formats every row of a CSV file and streams the results as CSV. Orchestrates
//! the flow between [`BatchReader`] (input), [`CurrencyFormatter`] (formatting)
//! and [`FormattedWriter`] (output).
//!
//! # Error Handling
//!
//! Only fatal errors abort a batch: the input file cannot be opened, or output
//! cannot be written. A row that cannot be read or formatted is logged with
//! its line number and skipped.

use crate::core::{CurrencyFormatter, CurrencyRegistry, CurrencyResolver};
use crate::io::csv_format::{FormatRequest, FormattedWriter};
use crate::io::BatchReader;
use crate::types::FormatError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Counts reported at the end of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub formatted: usize,
    pub skipped: usize,
}

/// Batch processor over a formatter
///
/// # Examples
///
/// ```no_run
/// use currency_formatter::batch::BatchFormatter;
/// use std::path::Path;
///
/// let batch = BatchFormatter::new();
/// let mut output = std::io::stdout();
/// batch.process(Path::new("amounts.csv"), &mut output)
///     .expect("Batch failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchFormatter<R = CurrencyRegistry> {
    formatter: CurrencyFormatter<R>,
}

impl BatchFormatter {
    pub fn new() -> Self {
        BatchFormatter {
            formatter: CurrencyFormatter::new(),
        }
    }
}

impl<R: CurrencyResolver> BatchFormatter<R> {
    pub fn with_formatter(formatter: CurrencyFormatter<R>) -> Self {
        BatchFormatter { formatter }
    }

    /// Format a single request
    pub fn format_request(&self, request: &FormatRequest) -> Result<String, FormatError> {
        self.formatter
            .select_currency(&request.currency)
            .apply(&request.overrides)
            .set_value(request.value)?
            .format()
    }

    /// Format every row of `input_path` and write the results to `output`
    pub fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchSummary, FormatError> {
        let reader = BatchReader::new(input_path)?;
        let mut writer = FormattedWriter::new(output)?;
        let mut summary = BatchSummary::default();

        for result in reader {
            let request = match result {
                Ok(request) => request,
                Err(e) => {
                    warn!("Skipping row: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.format_request(&request) {
                Ok(formatted) => {
                    writer.write_row(&request, &formatted)?;
                    summary.formatted += 1;
                }
                Err(e) => {
                    warn!(
                        amount = %request.amount,
                        currency = %request.currency,
                        "Skipping row: {}",
                        e
                    );
                    summary.skipped += 1;
                }
            }
        }

        writer.finish()?;

        info!(
            formatted = summary.formatted,
            skipped = summary.skipped,
            input = %input_path.display(),
            "Batch complete"
        );
        Ok(summary)
    }
}
