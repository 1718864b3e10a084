//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly.

mod logging;
mod repl;
mod service;

pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use service::FileServiceConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer service settings
    pub service: FileServiceConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning a warning per suspect value.
    ///
    /// Warnings do not stop startup; the caller decides how to present
    /// them.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            warnings.push("service.base_url is empty; requests cannot be sent".to_string());
        } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            warnings.push(format!(
                "service.base_url '{}' does not look like an HTTP URL",
                base_url
            ));
        }

        if let Some(path) = &self.logging.exchange_log
            && path.trim().is_empty()
        {
            warnings.push("logging.exchange_log is set but empty".to_string());
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Figment;
    use figment::providers::{Format, Serialized, Toml};

    fn parse(toml: &str) -> FileConfig {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(toml))
            .extract()
            .unwrap()
    }

    #[test]
    fn test_deserialize_full_config() {
        let config = parse(
            r#"
[service]
base_url = "https://qa.example.com"

[repl]
show_progress = false
history_file = "~/.local/share/askdesk/history.txt"

[logging]
exchange_log = "exchanges.jsonl"
"#,
        );

        assert_eq!(config.service.base_url, "https://qa.example.com");
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.local/share/askdesk/history.txt")
        );
        assert_eq!(config.logging.exchange_log.as_deref(), Some("exchanges.jsonl"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config = parse(
            r#"
[repl]
show_progress = false
"#,
        );

        assert!(!config.repl.show_progress);
        // Defaults should apply
        assert_eq!(config.service.base_url, "http://localhost:4080");
        assert!(config.logging.exchange_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:4080");
        assert!(config.repl.show_progress);
        assert!(config.repl.history_file.is_none());
        assert!(config.logging.exchange_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_empty_base_url() {
        let config = parse(
            r#"
[service]
base_url = "  "
"#,
        );
        let warnings = config.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("base_url"));
    }

    #[test]
    fn test_validate_flags_non_http_url() {
        let config = parse(
            r#"
[service]
base_url = "localhost:4080"
"#,
        );
        let warnings = config.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("does not look like an HTTP URL"));
    }
}
