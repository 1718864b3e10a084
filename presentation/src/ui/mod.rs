//! Terminal implementations of the UI notification port

pub mod console;
