//! Core business logic module
//!
//! This module contains the charge processing components:
//! - `traits` - Gateway and request-hook seams
//! - `config_validator` - Credential completeness checks
//! - `request_builder` - Form record to sale request transcription
//! - `classifier` - Gateway result classification
//! - `processor` - Charge orchestration
//! - `registry` - Host-owned processor cache

pub mod classifier;
pub mod config_validator;
pub mod processor;
pub mod registry;
pub mod request_builder;
pub mod traits;

pub use classifier::classify;
pub use config_validator::check_config;
pub use processor::{BraintreeProcessor, PROCESSOR_NAME};
pub use registry::ProcessorRegistry;
pub use request_builder::build_sale_request;
pub use traits::{Gateway, RequestHook};
