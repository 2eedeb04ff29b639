//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so both apps run with no config file present.

use serde::{Deserialize, Serialize};

/// Root application configuration, shared by both binaries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// strftime format for log-entry timestamps and the status-bar clock.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic tracing settings. Output goes to a dated file because stderr
/// is hidden behind the alternate screen while the app runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing-subscriber` env-filter directive, e.g. `"info"` or
    /// `"drowse=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            filter: default_filter(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_log_dir() -> String {
    "~/.local/share/drowse/logs".to_string()
}
fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.filter, "info");
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            timestamp_format = "%H:%M"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/drowse/logs");
    }
}
