//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, result serialization)
//! - `form_reader` - Streaming CSV reader with iterator interface

pub mod csv_format;
pub mod form_reader;

pub use csv_format::{convert_csv_record, write_results_csv, CsvFormRecord};
pub use form_reader::FormReader;
