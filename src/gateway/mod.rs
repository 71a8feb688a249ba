//! Gateway implementations
//!
//! - `http` - blocking HTTP client for the Braintree REST endpoint

pub mod http;

pub use http::HttpGateway;
