//! Presentation layer for askdesk
//!
//! This crate contains CLI definitions, output formatters, the console
//! UI adapter, and the interactive ask interface.

pub mod ask;
pub mod boundary;
pub mod cli;
pub mod output;
pub mod ui;

// Re-export commonly used types
pub use ask::AskRepl;
pub use boundary::ErrorBoundary;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::AnswerFormatter;
pub use ui::console::ConsoleUi;
