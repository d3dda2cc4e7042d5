//! Configuration for logging/tracing output

use serde::{Deserialize, Serialize};

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup log line (e.g., "recall")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter (e.g., "info", "recall_llm=debug")
    /// Defaults to `RUST_LOG`, then "info", if not set
    pub log_level: Option<String>,

    /// Enable console output
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Colored output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_service_name() -> String {
    "recall".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `RECALL_SERVICE_NAME` → service_name
    /// - `RECALL_LOG` or `RUST_LOG` → log_level
    /// - `NO_COLOR` (any value) → ansi off
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ObservabilityConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_name = lookup("RECALL_SERVICE_NAME").unwrap_or_else(default_service_name);
        let log_level = lookup("RECALL_LOG").or_else(|| lookup("RUST_LOG"));
        let ansi = lookup("NO_COLOR").is_none();

        Self {
            service_name,
            log_level,
            enable_console: true,
            ansi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "recall");
        assert!(config.log_level.is_none());
        assert!(config.enable_console);
    }

    #[test]
    fn test_recall_log_wins_over_rust_log() {
        let config = ObservabilityConfig::from_lookup(|key| match key {
            "RECALL_LOG" => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.ansi);
    }

    #[test]
    fn test_no_color_disables_ansi() {
        let config = ObservabilityConfig::from_lookup(|key| (key == "NO_COLOR").then(String::new));
        assert!(!config.ansi);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ObservabilityConfig =
            serde_json::from_str(r#"{"log_level":"trace"}"#).unwrap();
        assert_eq!(config.service_name, "recall");
        assert_eq!(config.log_level.as_deref(), Some("trace"));
        assert!(config.enable_console);
    }
}
