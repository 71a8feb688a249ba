//! Core traits for the gateway call and request customization
//!
//! These are the seams the host plugs into: a [`Gateway`] performs the actual
//! sale call, a [`RequestHook`] gets one chance to adjust the request first.

use crate::types::{FormRecord, GatewayError, SaleRequest, SaleResult};

/// Trait for performing a sale against a payment gateway
///
/// Implementations perform exactly one call per invocation, without retries.
/// Gateway-side rejections are part of the [`SaleResult`]; only failures to
/// obtain a result at all are returned as errors.
pub trait Gateway: Send + Sync {
    /// Submit a sale transaction
    fn sale(&self, request: &SaleRequest) -> Result<SaleResult, GatewayError>;
}

/// Trait for adjusting the outgoing request just before transmission
///
/// Invoked once per charge, synchronously, with exclusive access to the
/// request. Closures with the matching signature implement it directly.
pub trait RequestHook: Send + Sync {
    /// Mutate the outgoing request in place
    fn alter_request(&self, record: &FormRecord, request: &mut SaleRequest);
}

impl<F> RequestHook for F
where
    F: Fn(&FormRecord, &mut SaleRequest) + Send + Sync,
{
    fn alter_request(&self, record: &FormRecord, request: &mut SaleRequest) {
        self(record, request)
    }
}
