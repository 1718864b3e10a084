//! Interactive ask interface

pub mod repl;

pub use repl::AskRepl;
