//! Batch charging of form submissions
//!
//! This module drives a CSV file of form submissions through a
//! [`BraintreeProcessor`], one record at a time, and writes one result row
//! per input line.
//!
//! # Design
//!
//! The BatchRunner focuses on orchestration, delegating:
//! - CSV parsing to `FormReader` (iterator interface)
//! - Charging to `BraintreeProcessor::do_direct_payment`
//! - CSV output to `csv_format::write_results_csv`
//!
//! # Error Handling
//!
//! Opening or writing files is fatal. Everything that goes wrong for a single
//! record, including fatal processor errors such as recurring requests, is
//! logged and recorded in that record's result row; the batch continues.

use crate::core::BraintreeProcessor;
use crate::io::{write_results_csv, FormReader};
use crate::types::{ChargeResult, ChargeStatus};
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// Counts of what happened in one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub charged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub invalid: usize,
}

impl BatchSummary {
    fn record(&mut self, status: ChargeStatus) {
        match status {
            ChargeStatus::Charged => self.charged += 1,
            ChargeStatus::Skipped => self.skipped += 1,
            ChargeStatus::Failed => self.failed += 1,
            ChargeStatus::Invalid => self.invalid += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.charged + self.skipped + self.failed + self.invalid
    }
}

/// Sequential batch runner bound to one processor
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner<'a> {
    processor: &'a BraintreeProcessor,
}

impl<'a> BatchRunner<'a> {
    pub fn new(processor: &'a BraintreeProcessor) -> Self {
        BatchRunner { processor }
    }

    /// Charge every submission in `input_path` and write results to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(BatchSummary)` once every record has been attempted
    /// * `Err(String)` if the input cannot be opened or output cannot be written
    pub fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<BatchSummary, String> {
        let reader = FormReader::new(input_path)?;
        let mut results = Vec::new();
        let mut summary = BatchSummary::default();

        for (line, parsed) in reader {
            let result = match parsed {
                Ok(record) => {
                    let payment = self.processor.do_direct_payment(record);
                    match &payment {
                        Err(e) if e.is_fatal() => error!(line, error = %e, "unsupported request"),
                        Err(e) => warn!(line, error = %e, "charge failed"),
                        Ok(_) => {}
                    }
                    ChargeResult::from_payment(line, payment)
                }
                Err(e) => {
                    warn!(line, error = %e, "skipping malformed record");
                    ChargeResult::invalid(line, e)
                }
            };

            summary.record(result.status);
            results.push(result);
        }

        write_results_csv(&results, output)?;

        info!(
            charged = summary.charged,
            skipped = summary.skipped,
            failed = summary.failed,
            invalid = summary.invalid,
            "batch complete"
        );
        Ok(summary)
    }
}
