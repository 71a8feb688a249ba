//! Error types for the Braintree direct-payment processor
//!
//! This module defines the errors surfaced to the host and the errors raised
//! by gateway implementations.
//!
//! # Error Categories
//!
//! - **Unsupported features**: recurring payments, transfer checkout (fatal)
//! - **Gateway failures**: transport problems, declines, validation rejections
//! - **Configuration errors**: missing credentials, unreadable settings

use thiserror::Error;

/// Numeric code reported when the gateway call itself failed
pub const TRANSPORT_FAILURE_CODE: u32 = 9000;

/// Numeric code reported for validation failures and unknown errors
pub const DEFAULT_ERROR_CODE: u32 = 9001;

/// Message reported when a decline carries no processor response code
pub const UNKNOWN_SYSTEM_ERROR: &str = "Unknown System Error.";

/// Main error type returned to the host
///
/// None of these are raised past the processor boundary as panics; the host
/// turns them into its own error display through [`ProcessorError::report`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessorError {
    /// The request asked for something this processor does not implement
    ///
    /// This is a fatal error. The host normally halts the form workflow.
    #[error("{message}")]
    UnsupportedFeature {
        /// Description of the unsupported feature
        message: String,
    },

    /// The gateway call failed before a response could be classified
    #[error("{message}")]
    TransportFailure {
        /// Message of the underlying gateway error
        message: String,
    },

    /// The gateway attempted the transaction and the processor declined it
    #[error("{text}")]
    ProcessorDeclined {
        /// Processor response code, surfaced verbatim
        code: String,
        /// Processor response text, surfaced verbatim
        text: String,
    },

    /// The gateway rejected the shape of the request
    #[error("{message}")]
    ValidationFailed {
        /// Concatenated validation messages, prefixed
        message: String,
    },

    /// Required credential fields are missing
    ///
    /// Reported proactively by configuration checks, never during a call.
    #[error("{}", messages.join("; "))]
    ConfigIncomplete {
        /// One message per missing field
        messages: Vec<String>,
    },

    /// Settings could not be loaded or a processor is not configured
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem
        message: String,
    },
}

/// Code and message pair handed to the host's error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Numeric (or processor-supplied) error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ProcessorError {
    /// Create an UnsupportedFeature error
    pub fn unsupported(message: impl Into<String>) -> Self {
        ProcessorError::UnsupportedFeature {
            message: message.into(),
        }
    }

    /// Create a TransportFailure error
    pub fn transport(message: impl Into<String>) -> Self {
        ProcessorError::TransportFailure {
            message: message.into(),
        }
    }

    /// Create a ProcessorDeclined error
    pub fn declined(code: &str, text: &str) -> Self {
        ProcessorError::ProcessorDeclined {
            code: code.to_string(),
            text: text.to_string(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ProcessorError::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error should halt the host workflow
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessorError::UnsupportedFeature { .. })
    }

    /// Convert the error into the code/message pair the host records
    ///
    /// Declines report the processor's own code. A decline without a code
    /// falls back to the default code and a generic message.
    pub fn report(&self) -> ErrorReport {
        match self {
            ProcessorError::TransportFailure { message } => ErrorReport {
                code: TRANSPORT_FAILURE_CODE.to_string(),
                message: message.clone(),
            },
            ProcessorError::ProcessorDeclined { code, text } if !code.trim().is_empty() => {
                ErrorReport {
                    code: code.clone(),
                    message: text.clone(),
                }
            }
            ProcessorError::ProcessorDeclined { .. } => ErrorReport {
                code: DEFAULT_ERROR_CODE.to_string(),
                message: UNKNOWN_SYSTEM_ERROR.to_string(),
            },
            other => ErrorReport {
                code: DEFAULT_ERROR_CODE.to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Errors raised by a [`Gateway`](crate::core::Gateway) implementation
///
/// The processor never propagates these directly; they are folded into
/// [`ProcessorError::TransportFailure`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request could not be sent or the connection failed
    #[error("Gateway transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The gateway answered with a status the client does not understand
    #[error("Gateway returned unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The gateway response body could not be decoded
    #[error("Failed to decode gateway response: {message}")]
    Decode {
        /// Decoder error message
        message: String,
    },
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            GatewayError::Decode {
                message: error.to_string(),
            }
        } else {
            GatewayError::Transport {
                message: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Decode {
            message: error.to_string(),
        }
    }
}

impl From<GatewayError> for ProcessorError {
    fn from(error: GatewayError) -> Self {
        ProcessorError::transport(error.to_string())
    }
}

impl From<::config::ConfigError> for ProcessorError {
    fn from(error: ::config::ConfigError) -> Self {
        ProcessorError::configuration(error.to_string())
    }
}
