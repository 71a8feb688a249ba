//! Processor identity and credentials
//!
//! A processor is configured once by the host and is immutable afterwards.

use serde::Deserialize;
use std::fmt;

/// Sandbox API root
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.braintreegateway.com";

/// Production API root
pub const PRODUCTION_BASE_URL: &str = "https://api.braintreegateway.com";

/// Mode of operation chosen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Real charges against the production environment
    Live,
    /// Test charges against the sandbox environment
    Test,
}

/// Gateway environment selected by [`Mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Mode {
    /// Environment the gateway client should talk to
    pub fn environment(self) -> Environment {
        match self {
            Mode::Test => Environment::Sandbox,
            Mode::Live => Environment::Production,
        }
    }
}

impl Environment {
    /// Root URL of the environment's API
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Credentials for one configured processor
///
/// `merchant_account_id` selects a secondary receiving account under the
/// same credentials, typically one per settlement currency.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessorCredentials {
    pub mode: Mode,

    #[serde(default)]
    pub merchant_id: String,

    #[serde(default)]
    pub public_key: String,

    #[serde(default)]
    pub private_key: String,

    #[serde(default)]
    pub merchant_account_id: Option<String>,
}

impl ProcessorCredentials {
    /// Create credentials without a merchant account
    pub fn new(mode: Mode, merchant_id: &str, public_key: &str, private_key: &str) -> Self {
        ProcessorCredentials {
            mode,
            merchant_id: merchant_id.to_string(),
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            merchant_account_id: None,
        }
    }

    /// Route charges to a specific merchant account
    pub fn with_merchant_account(mut self, merchant_account_id: &str) -> Self {
        self.merchant_account_id = Some(merchant_account_id.to_string());
        self
    }

    /// Merchant account id, if one is configured and non-empty
    pub fn merchant_account(&self) -> Option<&str> {
        self.merchant_account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

// The private key must never reach logs.
impl fmt::Debug for ProcessorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorCredentials")
            .field("mode", &self.mode)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .field("merchant_account_id", &self.merchant_account_id)
            .finish()
    }
}
