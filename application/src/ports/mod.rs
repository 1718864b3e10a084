//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod exchange_log;
pub mod fault;
pub mod qa_gateway;
pub mod ui;
