//! Infrastructure layer for askdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod service;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLoggingConfig, FileReplConfig, FileServiceConfig};
pub use logging::{JsonlExchangeLogger, TracingFaultLog};
pub use service::{
    client::{HttpQaGateway, default_headers, with_client},
    response::{Disposition, ErrorBody, classify_response},
};
