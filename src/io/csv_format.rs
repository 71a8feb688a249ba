//! CSV format handling for form submissions and charge results
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvFormRecord structure for deserialization (host form field names)
//! - Conversion from CSV records to typed form records
//! - Charge result serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{ChargeResult, ExpiryDate, FormRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Column names are the host form's field names. Every column is optional:
/// different host versions submit different field sets, and a missing column
/// behaves like an empty one.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CsvFormRecord {
    pub amount: Option<String>,
    pub is_recur: Option<String>,
    pub credit_card_number: Option<String>,
    #[serde(rename = "credit_card_exp_date[M]")]
    pub credit_card_exp_month: Option<String>,
    #[serde(rename = "credit_card_exp_date[Y]")]
    pub credit_card_exp_year: Option<String>,
    pub cvv2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "email-5")]
    pub email_billing: Option<String>,
    #[serde(rename = "email-Primary")]
    pub email_primary: Option<String>,
    pub billing_first_name: Option<String>,
    pub billing_last_name: Option<String>,
    #[serde(rename = "billing_street_address-5")]
    pub billing_street_address: Option<String>,
    #[serde(rename = "billing_city-5")]
    pub billing_city: Option<String>,
    #[serde(rename = "billing_state_province-5")]
    pub billing_state_province: Option<String>,
    #[serde(rename = "billing_postal_code-5")]
    pub billing_postal_code: Option<String>,
    #[serde(rename = "billing_country-5")]
    pub billing_country: Option<String>,
    #[serde(rename = "qfKey")]
    pub qf_key: Option<String>,
    #[serde(rename = "entryURL")]
    pub entry_url: Option<String>,
}

/// Convert a CsvFormRecord to a FormRecord
///
/// This function:
/// - Parses the amount into a Decimal (empty means no amount)
/// - Parses the recurring flag
/// - Combines the expiry month and year columns
/// - Treats empty text columns as absent
///
/// # Returns
///
/// Result containing either:
/// - Ok(FormRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvFormRecord) -> Result<FormRecord, String> {
    let amount = match present(csv_record.amount) {
        Some(amount_str) => Some(
            Decimal::from_str(&amount_str)
                .map_err(|_| format!("Invalid amount '{}'", amount_str))?,
        ),
        None => None,
    };

    let is_recur = parse_flag(present(csv_record.is_recur).as_deref())?;

    let month = present(csv_record.credit_card_exp_month);
    let year = present(csv_record.credit_card_exp_year);
    let credit_card_exp_date = if month.is_some() || year.is_some() {
        Some(ExpiryDate {
            month: month.unwrap_or_default(),
            year: year.unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(FormRecord {
        amount,
        is_recur,
        credit_card_number: present(csv_record.credit_card_number),
        credit_card_exp_date,
        cvv2: present(csv_record.cvv2),
        first_name: present(csv_record.first_name),
        last_name: present(csv_record.last_name),
        billing_email: present(csv_record.email_billing),
        primary_email: present(csv_record.email_primary),
        billing_first_name: present(csv_record.billing_first_name),
        billing_last_name: present(csv_record.billing_last_name),
        billing_street_address: present(csv_record.billing_street_address),
        billing_city: present(csv_record.billing_city),
        billing_state_province: present(csv_record.billing_state_province),
        billing_postal_code: present(csv_record.billing_postal_code),
        billing_country: present(csv_record.billing_country),
        qf_key: present(csv_record.qf_key),
        entry_url: present(csv_record.entry_url),
        trxn_id: None,
        gross_amount: None,
        trxn_result_code: None,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<&str>) -> Result<bool, String> {
    match value.map(str::to_lowercase).as_deref() {
        None | Some("0") | Some("false") | Some("no") | Some("off") => Ok(false),
        Some("1") | Some("true") | Some("yes") | Some("on") => Ok(true),
        Some(other) => Err(format!("Invalid is_recur flag '{}'", other)),
    }
}

/// Write charge results to CSV format
///
/// Writes results with columns: line, status, trxn_id, gross_amount,
/// trxn_result_code, error_code, error_message.
/// Results are sorted by input line for deterministic output.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_results_csv(results: &[ChargeResult], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "line",
            "status",
            "trxn_id",
            "gross_amount",
            "trxn_result_code",
            "error_code",
            "error_message",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_results = results.to_vec();
    sorted_results.sort_by_key(|result| result.line);

    for result in sorted_results {
        let (error_code, error_message) = result
            .error
            .map(|report| (report.code, report.message))
            .unwrap_or_default();

        writer
            .write_record(&[
                result.line.to_string(),
                result.status.as_str().to_string(),
                result.trxn_id.unwrap_or_default(),
                result
                    .gross_amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_default(),
                result.trxn_result_code.unwrap_or_default(),
                error_code,
                error_message,
            ])
            .map_err(|e| format!("Failed to write result record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
