//! Braintree Direct Payment Library
//! # Overview
//!
//! This library provides a card payment processor for a CRM host's
//! contribution and event registration forms. Each form submission becomes a
//! single synchronous "sale" against the Braintree gateway, and the gateway's
//! answer is mapped back onto the submission or into a typed error.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (credentials, form record, sale request, outcome)
//! - [`core`] - Business logic components:
//!   - [`core::request_builder`] - Form record to sale request transcription
//!   - [`core::classifier`] - Gateway result classification
//!   - [`core::processor`] - Charge orchestration (`do_direct_payment`)
//!   - [`core::registry`] - Host-owned cache of processors by name
//!   - [`core::config_validator`] - Credential completeness checks
//! - [`gateway`] - HTTP gateway client
//! - [`io`] - CSV reading of form submissions and writing of results
//! - [`batch`] - Sequential batch charging
//! - [`config`] - Processor settings
//! - [`cli`] - CLI arguments parsing
//!
//! # Charge Outcomes
//!
//! Each charge attempt ends in exactly one of:
//!
//! - **Success**: transaction id, gross amount and status merged into the record
//! - **Declined**: the processor's response code and text
//! - **Validation failure**: every gateway validation message, concatenated
//! - **Suppressed**: zero amount (passes through) or recurring (refused)
//!
//! # Example
//!
//! ```no_run
//! use braintree_direct_payment::core::ProcessorRegistry;
//! use braintree_direct_payment::types::{FormRecord, Mode, ProcessorCredentials};
//! use rust_decimal::Decimal;
//!
//! let registry = ProcessorRegistry::new();
//! let credentials = ProcessorCredentials::new(Mode::Test, "merchant", "pub", "priv");
//! let processor = registry.get_or_create("main", &credentials).unwrap();
//!
//! let record = FormRecord {
//!     amount: Some(Decimal::new(1000, 2)),
//!     credit_card_number: Some("4111111111111111".to_string()),
//!     ..Default::default()
//! };
//! match processor.do_direct_payment(record) {
//!     Ok(record) => println!("charged: {:?}", record.trxn_id),
//!     Err(e) => eprintln!("error {}: {}", e.report().code, e),
//! }
//! ```

// Module declarations
pub mod batch;
pub mod cli;
pub mod config;
pub mod core;
pub mod gateway;
pub mod io;
pub mod observability;
pub mod types;

pub use batch::{BatchRunner, BatchSummary};
pub use core::{BraintreeProcessor, Gateway, ProcessorRegistry, RequestHook};
pub use types::{
    FormRecord, GatewayError, Mode, ProcessorCredentials, ProcessorError, SaleOutcome,
    SaleRequest, SaleResult,
};
