//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOG_FILTER: &str = "ats_docs_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Delay of the simulated submit, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "ats-docs", "ats-docs-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("ats-docs-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1500))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.log_filter(), "ats_docs_tui=info");
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::from_json(
            r#"{"submit_delay_ms": 250, "log_filter": "ats_docs_tui=debug"}"#,
        )
        .unwrap();
        assert_eq!(config.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.log_filter(), "ats_docs_tui=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::from_json("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let parsed = TuiConfig::from_json(r#"{"submit_delay_ms": 10, "theme": "dark"}"#).unwrap();
        assert_eq!(parsed.submit_delay_ms, Some(10));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(TuiConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_paths_do_not_panic() {
        let _config = TuiConfig::config_path();
        let _log = TuiConfig::log_path();
    }
}
