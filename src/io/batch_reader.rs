//! Streaming CSV reader with iterator interface
//!
//! Yields one [`FormatRequest`] per data row of a batch file. Fatal errors
//! (file missing or unreadable header) are returned from `new()`; row-level
//! problems are yielded as `Err` items carrying the line number, so callers
//! can log them and move on.
//!
//! ```no_run
//! use currency_formatter::io::BatchReader;
//! use std::path::Path;
//!
//! let reader = BatchReader::new(Path::new("amounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(request) => println!("{} {}", request.currency, request.value),
//!         Err(e) => eprintln!("Skipped: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord, FormatRequest};
use crate::types::FormatError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over batch input rows
#[derive(Debug)]
pub struct BatchReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl BatchReader {
    /// Open a batch CSV file
    ///
    /// The reader trims every field and tolerates rows with fewer columns
    /// than the header (trailing optional columns may be left out).
    pub fn new(path: &Path) -> Result<Self, FormatError> {
        let file = File::open(path).map_err(|e| FormatError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for BatchReader {
    type Item = Result<FormatRequest, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let result = deserializer.next()?;
        self.line_num += 1;
        // Header occupies line 1
        let line = self.line_num + 1;

        Some(
            result
                .map_err(FormatError::from)
                .and_then(convert_csv_record)
                .map_err(|e| format!("Line {}: {}", line, e)),
        )
    }
}
