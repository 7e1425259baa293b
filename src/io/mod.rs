//! I/O module
//!
//! Handles batch CSV input and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `batch_reader` - Streaming CSV reader with iterator interface

pub mod batch_reader;
pub mod csv_format;

pub use batch_reader::BatchReader;
pub use csv_format::{convert_csv_record, CsvRecord, FormatRequest, FormattedWriter};
