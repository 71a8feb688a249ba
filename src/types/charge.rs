//! Per-submission result of a batch run

use super::error::{ErrorReport, ProcessorError};
use super::form::FormRecord;
use rust_decimal::Decimal;

/// What happened to one form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    /// The gateway accepted the sale
    Charged,
    /// Zero or empty amount, nothing was sent
    Skipped,
    /// The processor returned an error
    Failed,
    /// The CSV row could not be turned into a form record
    Invalid,
}

impl ChargeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ChargeStatus::Charged => "charged",
            ChargeStatus::Skipped => "skipped",
            ChargeStatus::Failed => "failed",
            ChargeStatus::Invalid => "invalid",
        }
    }
}

/// Result row written for each input line
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeResult {
    /// 1-based data line in the input (header excluded)
    pub line: usize,
    pub status: ChargeStatus,
    pub trxn_id: Option<String>,
    pub gross_amount: Option<Decimal>,
    pub trxn_result_code: Option<String>,
    pub error: Option<ErrorReport>,
}

impl ChargeResult {
    /// Result of a `do_direct_payment` call
    pub fn from_payment(line: usize, result: Result<FormRecord, ProcessorError>) -> Self {
        match result {
            Ok(record) => {
                let status = if record.trxn_id.is_some() {
                    ChargeStatus::Charged
                } else {
                    ChargeStatus::Skipped
                };
                ChargeResult {
                    line,
                    status,
                    trxn_id: record.trxn_id,
                    gross_amount: record.gross_amount,
                    trxn_result_code: record.trxn_result_code,
                    error: None,
                }
            }
            Err(error) => ChargeResult::failure(line, ChargeStatus::Failed, error.report()),
        }
    }

    /// Result of a row that never reached the processor
    pub fn invalid(line: usize, message: String) -> Self {
        ChargeResult::failure(
            line,
            ChargeStatus::Invalid,
            ErrorReport {
                code: String::new(),
                message,
            },
        )
    }

    fn failure(line: usize, status: ChargeStatus, report: ErrorReport) -> Self {
        ChargeResult {
            line,
            status,
            trxn_id: None,
            gross_amount: None,
            trxn_result_code: None,
            error: Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charged_when_transaction_id_set() {
        let record = FormRecord {
            amount: Some(Decimal::TEN),
            trxn_id: Some("T1".to_string()),
            gross_amount: Some(Decimal::TEN),
            trxn_result_code: Some("settled".to_string()),
            ..Default::default()
        };
        let result = ChargeResult::from_payment(3, Ok(record));
        assert_eq!(result.status, ChargeStatus::Charged);
        assert_eq!(result.line, 3);
        assert_eq!(result.trxn_id.as_deref(), Some("T1"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_skipped_when_record_passed_through() {
        let result = ChargeResult::from_payment(1, Ok(FormRecord::default()));
        assert_eq!(result.status, ChargeStatus::Skipped);
        assert_eq!(result.status.as_str(), "skipped");
    }

    #[test]
    fn test_failed_carries_error_report() {
        let result =
            ChargeResult::from_payment(2, Err(ProcessorError::declined("2000", "Do Not Honor")));
        assert_eq!(result.status, ChargeStatus::Failed);
        assert_eq!(
            result.error,
            Some(ErrorReport {
                code: "2000".to_string(),
                message: "Do Not Honor".to_string(),
            })
        );
    }
}
