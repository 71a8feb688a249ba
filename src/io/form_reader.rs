//! Streaming CSV reader for form submissions
//!
//! Provides a streaming iterator over form records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! FormReader implements the Iterator trait, yielding
//! `(line, Result<FormRecord, String>)` for each CSV row:
//!
//! ```no_run
//! use braintree_direct_payment::io::FormReader;
//! use std::path::Path;
//!
//! let reader = FormReader::new(Path::new("submissions.csv")).unwrap();
//! for (line, result) in reader {
//!     match result {
//!         Ok(record) => println!("line {}: amount {:?}", line, record.amount),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvFormRecord};
use crate::types::FormRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming form submission reader
///
/// Reads one CSV row at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct FormReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl FormReader {
    /// Create a new FormReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing optional columns)
    ///
    /// # Returns
    ///
    /// * `Ok(FormReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

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

impl Iterator for FormReader {
    /// Data line number (1-based, header excluded) and the parsed record
    type Item = (usize, Result<FormRecord, String>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvFormRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;
        let line = self.line_num;

        // Error messages use the physical file line (header is line 1)
        let result = match next {
            Ok(csv_record) => {
                convert_csv_record(csv_record).map_err(|e| format!("Line {}: {}", line + 1, e))
            }
            Err(e) => Err(format!("Line {}: CSV parse error: {}", line + 1, e)),
        };

        Some((line, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_form_reader_fails_on_missing_file() {
        let result = FormReader::new(Path::new("nonexistent.csv"));
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_form_reader_iterates_records() {
        let csv_content = "amount,credit_card_number,first_name\n\
                           10.00, 4111111111111111 ,Ada\n\
                           0,,\n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = FormReader::new(file.path()).unwrap().collect();
        assert_eq!(records.len(), 2);

        let (line, first) = &records[0];
        let first = first.as_ref().unwrap();
        assert_eq!(*line, 1);
        assert_eq!(first.amount, Some(Decimal::new(1000, 2)));
        assert_eq!(first.credit_card_number.as_deref(), Some("4111111111111111"));
        assert_eq!(first.first_name.as_deref(), Some("Ada"));

        let (line, second) = &records[1];
        assert_eq!(*line, 2);
        assert_eq!(second.as_ref().unwrap().amount, Some(Decimal::ZERO));
    }

    #[test]
    fn test_form_reader_reports_line_of_bad_record() {
        let csv_content = "amount,is_recur\n\
                           10.00,0\n\
                           abc,0\n\
                           5.00,1\n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = FormReader::new(file.path()).unwrap().collect();
        assert_eq!(records.len(), 3);
        assert!(records[0].1.is_ok());
        assert_eq!(records[1].0, 2);
        assert!(records[1].1.as_ref().unwrap_err().starts_with("Line 3:"));
        assert!(records[2].1.as_ref().unwrap().is_recur);
    }
}
