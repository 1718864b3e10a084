//! Configuration file loading for askdesk
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./askdesk.toml` or `./.askdesk.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/askdesk/config.toml`
//! 4. Fallback: `~/.config/askdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLoggingConfig, FileReplConfig, FileServiceConfig};
pub use loader::ConfigLoader;
