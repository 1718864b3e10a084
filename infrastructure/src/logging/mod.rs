//! Logging infrastructure: structured exchange logging and fault capture.
//!
//! Provides [`JsonlExchangeLogger`], a JSONL file writer that implements the
//! [`ExchangeLogger`](askdesk_application::ExchangeLogger) port, and
//! [`TracingFaultLog`], the production sink for errors nothing else handles.

mod exchange;
mod fault;

pub use exchange::JsonlExchangeLogger;
pub use fault::TracingFaultLog;
