//! Gateway result classification
//!
//! Maps a raw [`SaleResult`] onto exactly one [`SaleOutcome`]. The branches
//! are evaluated in a fixed order: success, then an attempted-but-declined
//! transaction, then validation errors.

use crate::types::{SaleOutcome, SaleResult};

/// Prefix of the concatenated validation message
pub const VALIDATION_PREFIX: &str = "Validation errors:";

/// Classify a raw sale result
///
/// A transaction object, when present on a failed result, always wins over
/// the error collection. Validation messages are concatenated without any
/// separator.
pub fn classify(result: &SaleResult) -> SaleOutcome {
    match (&result.transaction, result.success) {
        (Some(transaction), true) => SaleOutcome::Success {
            transaction_id: transaction.id.clone(),
            gross_amount: transaction.amount,
            result_status_code: transaction.status.clone(),
        },
        (Some(transaction), false) => SaleOutcome::Declined {
            processor_response_code: transaction.processor_response_code.clone(),
            processor_response_text: transaction.processor_response_text.clone(),
        },
        // A success without a transaction has nothing to report back; it is
        // treated like a rejection.
        (None, _) => {
            let mut message = VALIDATION_PREFIX.to_string();
            for error in result.errors.deep_all() {
                message.push_str(&error.message);
            }
            SaleOutcome::ValidationFailed { message }
        }
    }
}
