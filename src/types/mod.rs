//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `charge`: Per-submission batch results
//! - `credentials`: Processor mode and credentials
//! - `form`: Inbound form submission record
//! - `sale`: Sale request, raw gateway result and classified outcome
//! - `error`: Error types for the processor and gateways

pub mod charge;
pub mod credentials;
pub mod error;
pub mod form;
pub mod sale;

pub use charge::{ChargeResult, ChargeStatus};
pub use credentials::{Environment, Mode, ProcessorCredentials};
pub use error::{ErrorReport, GatewayError, ProcessorError};
pub use form::{ExpiryDate, FormRecord};
pub use sale::{
    BillingAddress, CreditCard, Customer, ErrorCollection, SaleOptions, SaleOutcome, SaleRequest,
    SaleResult, SuppressReason, Transaction, ValidationError,
};
