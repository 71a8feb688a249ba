//! Host-owned processor registry
//!
//! This module provides the `ProcessorRegistry`, which caches one
//! [`BraintreeProcessor`] per processor name. The host owns the registry and
//! passes it to whatever handles form submissions; there is no global state.
//!
//! # Design
//!
//! The registry uses `DashMap` so request handlers on different threads can
//! look up processors without a global lock. Entries are created lazily on
//! first use and never invalidated: credentials are fixed for the lifetime
//! of the process.
//!
//! # Thread Safety
//!
//! Two callers asking for the same new name at the same time may both build
//! a processor. The first insert wins and both get the cached instance, so
//! the race only costs a discarded build.

use crate::core::processor::BraintreeProcessor;
use crate::core::traits::{Gateway, RequestHook};
use crate::gateway::HttpGateway;
use crate::types::{GatewayError, ProcessorCredentials, ProcessorError};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds the gateway client for a set of credentials
pub type GatewayFactory =
    dyn Fn(&ProcessorCredentials) -> Result<Arc<dyn Gateway>, GatewayError> + Send + Sync;

/// Lazily populated cache of processors keyed by processor name
pub struct ProcessorRegistry {
    /// Concurrent map of processor name to processor instance
    processors: DashMap<String, Arc<BraintreeProcessor>>,
    factory: Box<GatewayFactory>,
    hook: Option<Arc<dyn RequestHook>>,
}

impl ProcessorRegistry {
    /// Create a registry whose processors talk HTTP to the gateway
    pub fn new() -> Self {
        Self::with_gateway_factory(|credentials| {
            let gateway: Arc<dyn Gateway> = Arc::new(HttpGateway::new(credentials)?);
            Ok(gateway)
        })
    }

    /// Create a registry that builds gateways with the given factory
    pub fn with_gateway_factory<F>(factory: F) -> Self
    where
        F: Fn(&ProcessorCredentials) -> Result<Arc<dyn Gateway>, GatewayError>
            + Send
            + Sync
            + 'static,
    {
        ProcessorRegistry {
            processors: DashMap::new(),
            factory: Box::new(factory),
            hook: None,
        }
    }

    /// Install a request hook on every processor this registry creates
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Get the processor registered under `name`, creating it on first use
    ///
    /// `credentials` are only read when the processor does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a `TransportFailure` if the gateway client cannot be built.
    pub fn get_or_create(
        &self,
        name: &str,
        credentials: &ProcessorCredentials,
    ) -> Result<Arc<BraintreeProcessor>, ProcessorError> {
        if let Some(existing) = self.processors.get(name) {
            return Ok(Arc::clone(existing.value()));
        }

        let gateway = (self.factory)(credentials)?;
        let mut processor = BraintreeProcessor::with_gateway(credentials.clone(), gateway);
        if let Some(hook) = &self.hook {
            processor = processor.with_hook(Arc::clone(hook));
        }

        debug!(processor = name, "registering processor");
        let entry = self
            .processors
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(processor));
        Ok(Arc::clone(entry.value()))
    }

    /// Get an already registered processor
    pub fn get(&self, name: &str) -> Option<Arc<BraintreeProcessor>> {
        self.processors
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.processors.len())
            .field("hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}
