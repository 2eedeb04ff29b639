//! Diagnostic tracing to disk.
//!
//! When enabled, `tracing` output goes to a daily file named
//! `drowse_<date>.log` in the configured log directory (default:
//! `~/.local/share/drowse/logs/`). The terminal runs on the alternate
//! screen, so writing diagnostics to stderr would corrupt the UI.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. No-op if logging is disabled.
///
/// An unparseable filter directive falls back to `info` rather than
/// failing startup; only filesystem errors propagate to the caller.
pub fn init_diagnostics(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("drowse_{date}.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "diagnostics initialized");
    Ok(())
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/var/log/drowse"), PathBuf::from("/var/log/drowse"));
    }

    #[test]
    fn test_expand_home_resolves_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_logging_is_noop() {
        let config = LoggingConfig::default();
        assert!(!config.enabled);
        assert!(init_diagnostics(&config).is_ok());
    }
}
