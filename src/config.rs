//! Processor settings
//!
//! Credentials live in host configuration, not in code. They are read from a
//! TOML file with one table per processor and can be overridden from the
//! environment:
//!
//! ```toml
//! [processors.main]
//! mode = "test"
//! merchant_id = "abc123"
//! public_key = "pub"
//! private_key = "priv"
//! merchant_account_id = "eur_account"   # optional
//! ```
//!
//! `BRAINTREE_PROCESSORS__MAIN__PRIVATE_KEY=...` overrides the private key of
//! processor `main`. Environment keys are lower-cased, so processor names
//! should be lower case.

use crate::types::{ProcessorCredentials, ProcessorError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "BRAINTREE";

/// All configured processors, keyed by processor name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub processors: BTreeMap<String, ProcessorCredentials>,
}

impl Settings {
    /// Load settings from an optional file plus environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ProcessorError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Credentials of the named processor
    pub fn processor(&self, name: &str) -> Result<&ProcessorCredentials, ProcessorError> {
        self.processors.get(name).ok_or_else(|| {
            ProcessorError::configuration(format!("processor '{}' is not configured", name))
        })
    }
}
