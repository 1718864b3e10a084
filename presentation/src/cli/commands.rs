//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Question echo plus the full response block
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for askdesk
#[derive(Parser, Debug)]
#[command(name = "askdesk")]
#[command(version, about = "Console client for a question-and-answer service")]
#[command(long_about = r#"
askdesk submits a question to an answer service and renders the reply.

Responses are normalized before rendering:
- structured service errors are shown once as an error notification
- unauthorized replies are suppressed and render as "(no answer)"
- transport failures are recorded in the diagnostic log only

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./askdesk.toml      Project-level config
3. ~/.config/askdesk/config.toml   Global config

Example:
  askdesk "What's the best way to handle errors in Rust?"
  askdesk --server http://qa.internal:4080 "Where is the deploy runbook?"
  askdesk --chat
"#)]
pub struct Cli {
    /// The question to submit (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Base URL of the answer service (overrides config)
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "answer")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
