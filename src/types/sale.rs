//! Sale request, raw gateway result and classified outcome

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card fields of a sale
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub number: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub cvv: String,
}

// Card data must never reach logs in clear.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4: String = self
            .number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        f.debug_struct("CreditCard")
            .field("number", &format_args!("****{}", last4))
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("cvv", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOptions {
    /// Settle immediately instead of only authorizing
    pub submit_for_settlement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country_code_alpha2: String,
}

/// Outgoing "sale" transaction
///
/// Built fresh per charge from a [`FormRecord`](crate::types::FormRecord) and
/// discarded after the gateway call. Hooks may mutate it before it is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub amount: Decimal,
    pub credit_card: CreditCard,
    pub options: SaleOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,
}

/// Transaction object returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub processor_response_code: String,
    #[serde(default)]
    pub processor_response_text: String,
}

/// A single validation error reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub code: String,
    pub message: String,
}

/// Validation errors, nested by the request attribute they refer to
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorCollection {
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub errors: Vec<ValidationError>,
    #[serde(default)]
    pub nested: Vec<ErrorCollection>,
}

impl ErrorCollection {
    /// Every error in the tree, own errors before nested ones, depth first
    pub fn deep_all(&self) -> Vec<&ValidationError> {
        let mut all: Vec<&ValidationError> = self.errors.iter().collect();
        for nested in &self.nested {
            all.extend(nested.deep_all());
        }
        all
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.nested.iter().all(ErrorCollection::is_empty)
    }
}

/// Raw result of a sale call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleResult {
    pub success: bool,
    pub transaction: Option<Transaction>,
    pub errors: ErrorCollection,
}

impl SaleResult {
    /// A successful result carrying its transaction
    pub fn successful(transaction: Transaction) -> Self {
        SaleResult {
            success: true,
            transaction: Some(transaction),
            errors: ErrorCollection::default(),
        }
    }

    /// A failed result, with or without an attempted transaction
    pub fn failed(transaction: Option<Transaction>, errors: ErrorCollection) -> Self {
        SaleResult {
            success: false,
            transaction,
            errors,
        }
    }
}

/// Why a charge was not sent to the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// Nothing to charge; the record passes through untouched
    ZeroAmount,
    /// Recurring contributions are not supported
    RecurringUnsupported,
}

/// Classified outcome of one charge attempt
///
/// Exactly one variant is produced per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleOutcome {
    Success {
        transaction_id: String,
        gross_amount: Decimal,
        result_status_code: String,
    },
    Declined {
        processor_response_code: String,
        processor_response_text: String,
    },
    ValidationFailed {
        message: String,
    },
    Suppressed {
        reason: SuppressReason,
    },
}
