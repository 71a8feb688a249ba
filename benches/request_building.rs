//! Benchmark suite for the per-charge hot path
//!
//! Measures the pure parts of a charge, with the gateway call stubbed out,
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use braintree_direct_payment::core::{build_sale_request, classify, Gateway};
use braintree_direct_payment::types::{
    ErrorCollection, ExpiryDate, FormRecord, GatewayError, Mode, ProcessorCredentials,
    SaleRequest, SaleResult, Transaction, ValidationError,
};
use braintree_direct_payment::BraintreeProcessor;
use rust_decimal::Decimal;
use std::hint::black_box;
use std::sync::Arc;

fn main() {
    divan::main();
}

struct ApprovingGateway;

impl Gateway for ApprovingGateway {
    fn sale(&self, request: &SaleRequest) -> Result<SaleResult, GatewayError> {
        Ok(SaleResult::successful(transaction(request.amount)))
    }
}

fn transaction(amount: Decimal) -> Transaction {
    Transaction {
        id: "T1".to_string(),
        amount,
        status: "submitted_for_settlement".to_string(),
        processor_response_code: "1000".to_string(),
        processor_response_text: "Approved".to_string(),
    }
}

fn credentials() -> ProcessorCredentials {
    ProcessorCredentials::new(Mode::Test, "merchant", "public", "private")
        .with_merchant_account("acct")
}

fn full_record() -> FormRecord {
    FormRecord {
        amount: Some(Decimal::new(2550, 2)),
        credit_card_number: Some("4111111111111111".to_string()),
        credit_card_exp_date: Some(ExpiryDate {
            month: "12".to_string(),
            year: "2030".to_string(),
        }),
        cvv2: Some("123".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        billing_email: Some("ada@billing.example.org".to_string()),
        primary_email: Some("ada@example.org".to_string()),
        billing_first_name: Some("Ada".to_string()),
        billing_last_name: Some("Lovelace".to_string()),
        billing_street_address: Some("12 St James's Square".to_string()),
        billing_city: Some("London".to_string()),
        billing_postal_code: Some("SW1Y 4JH".to_string()),
        billing_country: Some("GB".to_string()),
        qf_key: Some("qf1".to_string()),
        entry_url: Some("/civicrm/contribute/transact?reset=1&id=3".to_string()),
        ..Default::default()
    }
}

/// Sale request built from a fully populated form record
#[divan::bench]
fn build_full_request(bencher: divan::Bencher) {
    let record = full_record();
    let credentials = credentials();
    bencher.bench_local(|| build_sale_request(black_box(&record), black_box(&credentials)));
}

/// Classification of a validation failure with nested errors
#[divan::bench]
fn classify_validation_errors(bencher: divan::Bencher) {
    let errors = ErrorCollection {
        attribute: None,
        errors: vec![],
        nested: vec![ErrorCollection {
            attribute: Some("creditCard".to_string()),
            errors: (0..5)
                .map(|i| ValidationError {
                    attribute: "number".to_string(),
                    code: format!("8171{}", i),
                    message: "Credit card number is invalid.".to_string(),
                })
                .collect(),
            nested: vec![],
        }],
    };
    let result = SaleResult::failed(None, errors);
    bencher.bench_local(|| classify(black_box(&result)));
}

/// Whole charge against an in-memory gateway
#[divan::bench]
fn direct_payment_approved(bencher: divan::Bencher) {
    let processor = BraintreeProcessor::with_gateway(credentials(), Arc::new(ApprovingGateway));
    bencher
        .with_inputs(full_record)
        .bench_local_values(|record| processor.do_direct_payment(record));
}
