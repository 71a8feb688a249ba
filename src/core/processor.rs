//! Direct-payment processor
//!
//! This module provides the BraintreeProcessor that the host calls for each
//! form submission. It orchestrates one charge by coordinating the request
//! builder, the optional request hook, the gateway and the classifier.
//!
//! The processor enforces these rules:
//! - Recurring contributions are refused before anything is sent
//! - Zero or empty amounts pass through untouched and never reach the gateway
//! - Every gateway-side failure becomes a typed [`ProcessorError`]

use crate::core::classifier::classify;
use crate::core::config_validator;
use crate::core::request_builder::build_sale_request;
use crate::core::traits::{Gateway, RequestHook};
use crate::gateway::HttpGateway;
use crate::types::{
    FormRecord, GatewayError, ProcessorCredentials, ProcessorError, SaleOutcome, SuppressReason,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn, Span};

/// Display name used in host-facing messages
pub const PROCESSOR_NAME: &str = "Braintree";

/// Card processor bound to one set of credentials
///
/// Processors are immutable once built and safe to share between threads;
/// the host normally obtains them from a
/// [`ProcessorRegistry`](crate::core::ProcessorRegistry).
pub struct BraintreeProcessor {
    credentials: ProcessorCredentials,
    gateway: Arc<dyn Gateway>,
    hook: Option<Arc<dyn RequestHook>>,
}

impl BraintreeProcessor {
    /// Create a processor talking HTTP to the environment selected by the
    /// credentials' mode
    ///
    /// # Errors
    ///
    /// Returns a `TransportFailure` if the HTTP client cannot be created.
    pub fn new(credentials: ProcessorCredentials) -> Result<Self, ProcessorError> {
        let gateway = HttpGateway::new(&credentials)?;
        Ok(Self::with_gateway(credentials, Arc::new(gateway)))
    }

    /// Create a processor using the given gateway
    pub fn with_gateway(credentials: ProcessorCredentials, gateway: Arc<dyn Gateway>) -> Self {
        BraintreeProcessor {
            credentials,
            gateway,
            hook: None,
        }
    }

    /// Install the hook invoked on every outgoing request
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn credentials(&self) -> &ProcessorCredentials {
        &self.credentials
    }

    /// Check that the processor's credentials are complete
    ///
    /// # Returns
    ///
    /// One message per missing credential; empty when the configuration is
    /// usable.
    pub fn check_config(&self) -> Vec<String> {
        config_validator::check_config(&self.credentials)
    }

    /// Like [`check_config`](Self::check_config), as a `Result`
    pub fn ensure_config(&self) -> Result<(), ProcessorError> {
        let messages = self.check_config();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ProcessorError::ConfigIncomplete { messages })
        }
    }

    /// Offsite transfer checkout is not offered by this processor
    pub fn do_transfer_checkout(&self, _record: &FormRecord) -> Result<FormRecord, ProcessorError> {
        Err(ProcessorError::unsupported(
            "Use direct billing instead of Transfer method.",
        ))
    }

    /// Run one charge attempt and classify it
    ///
    /// Guards run before anything is built: recurring requests and zero
    /// amounts are suppressed. Otherwise the request is built, handed to the
    /// hook, sent once, and the result classified.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error if no result could be obtained at all.
    #[instrument(
        name = "charge",
        skip_all,
        fields(
            merchant_id = %self.credentials.merchant_id,
            mode = ?self.credentials.mode,
            return_url = tracing::field::Empty,
        )
    )]
    pub fn evaluate(&self, record: &FormRecord) -> Result<SaleOutcome, GatewayError> {
        if record.is_recur {
            return Ok(SaleOutcome::Suppressed {
                reason: SuppressReason::RecurringUnsupported,
            });
        }

        if record.is_zero_amount() {
            debug!("zero amount, skipping gateway");
            return Ok(SaleOutcome::Suppressed {
                reason: SuppressReason::ZeroAmount,
            });
        }

        if let Some(url) = record.error_return_url() {
            Span::current().record("return_url", url.as_str());
        }

        let mut request = build_sale_request(record, &self.credentials);

        if let Some(hook) = &self.hook {
            hook.alter_request(record, &mut request);
        }

        let result = self.gateway.sale(&request)?;
        Ok(classify(&result))
    }

    /// Charge a form submission
    ///
    /// # Returns
    ///
    /// * `Ok(record)` unchanged when the amount is empty or zero
    /// * `Ok(record)` with `trxn_id`, `gross_amount` and `trxn_result_code`
    ///   set when the gateway accepted the sale
    ///
    /// # Errors
    ///
    /// - `UnsupportedFeature` for recurring contributions (fatal)
    /// - `ProcessorDeclined` when the processor declined the card
    /// - `ValidationFailed` when the gateway rejected the request
    /// - `TransportFailure` when the gateway could not be reached
    pub fn do_direct_payment(&self, mut record: FormRecord) -> Result<FormRecord, ProcessorError> {
        let outcome = self.evaluate(&record).map_err(|e| {
            warn!(error = %e, "gateway call failed");
            ProcessorError::from(e)
        })?;

        match outcome {
            SaleOutcome::Suppressed {
                reason: SuppressReason::ZeroAmount,
            } => Ok(record),
            SaleOutcome::Suppressed {
                reason: SuppressReason::RecurringUnsupported,
            } => Err(ProcessorError::unsupported(format!(
                "{}: recurring payments not implemented",
                PROCESSOR_NAME
            ))),
            SaleOutcome::Success {
                transaction_id,
                gross_amount,
                result_status_code,
            } => {
                info!(trxn_id = %transaction_id, status = %result_status_code, "sale accepted");
                record.trxn_id = Some(transaction_id);
                record.gross_amount = Some(gross_amount);
                record.trxn_result_code = Some(result_status_code);
                Ok(record)
            }
            SaleOutcome::Declined {
                processor_response_code,
                processor_response_text,
            } => {
                info!(code = %processor_response_code, "sale declined");
                Err(ProcessorError::declined(
                    &processor_response_code,
                    &processor_response_text,
                ))
            }
            SaleOutcome::ValidationFailed { message } => {
                info!(%message, "sale rejected");
                Err(ProcessorError::ValidationFailed { message })
            }
        }
    }
}

impl fmt::Debug for BraintreeProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BraintreeProcessor")
            .field("credentials", &self.credentials)
            .field("hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}
