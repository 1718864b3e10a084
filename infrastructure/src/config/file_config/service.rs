//! Answer service configuration from TOML (`[service]` section)

use serde::{Deserialize, Serialize};

/// Raw answer service configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the answer service
    pub base_url: String,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4080".to_string(),
        }
    }
}
