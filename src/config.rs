//! Toolkit configuration
//!
//! Loaded from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "empty_containers": "preserve",
//!   "conflicts": "overwrite",
//!   "log_enabled": true,
//!   "log_level": "INFO"
//! }
//! ```
//!
//! Unknown fields are rejected so that typos do not silently fall back to
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flatten::{ConflictPolicy, EmptyContainers};
use crate::observability::{Logger, Severity};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration
    #[error("invalid config '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "TREEPATH_CONFIG_IO",
            ConfigError::Invalid { .. } => "TREEPATH_CONFIG_INVALID",
        }
    }
}

/// Behavior switches shared by every toolkit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolkitConfig {
    /// How the flattener treats empty sequences and mappings (default: drop)
    #[serde(default)]
    pub empty_containers: EmptyContainers,

    /// How the unflattener treats conflicting keys (default: reject)
    #[serde(default)]
    pub conflicts: ConflictPolicy,

    /// Whether structured log lines are written to stderr (default: false)
    #[serde(default)]
    pub log_enabled: bool,

    /// Minimum severity written when logging is enabled (default: WARN)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_log_level() -> Severity {
    Severity::Warn
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            empty_containers: EmptyContainers::default(),
            conflicts: ConflictPolicy::default(),
            log_enabled: false,
            log_level: default_log_level(),
        }
    }
}

impl ToolkitConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&content).map_err(|reason| ConfigError::Invalid {
            path: path.display().to_string(),
            reason,
        })
    }

    /// Parses configuration JSON. The error is a human-readable reason.
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Keep empty containers as entries when flattening
    pub fn with_empty_containers(mut self, empty_containers: EmptyContainers) -> Self {
        self.empty_containers = empty_containers;
        self
    }

    /// Set the unflatten conflict policy
    pub fn with_conflicts(mut self, conflicts: ConflictPolicy) -> Self {
        self.conflicts = conflicts;
        self
    }

    /// Enable logging at `level` and above
    pub fn with_logging(mut self, level: Severity) -> Self {
        self.log_enabled = true;
        self.log_level = level;
        self
    }

    /// Builds the logger this configuration describes.
    pub fn logger(&self) -> Logger {
        if self.log_enabled {
            Logger::new(self.log_level)
        } else {
            Logger::disabled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = ToolkitConfig::default();
        assert_eq!(config.empty_containers, EmptyContainers::Drop);
        assert_eq!(config.conflicts, ConflictPolicy::Reject);
        assert!(!config.log_enabled);
        assert_eq!(config.log_level, Severity::Warn);
        assert_eq!(config.logger(), Logger::disabled());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ToolkitConfig::from_json_str("{}").unwrap(), ToolkitConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("treepath.json");
        fs::write(
            &path,
            r#"{"empty_containers": "preserve", "conflicts": "overwrite", "log_enabled": true, "log_level": "INFO"}"#,
        )
        .unwrap();

        let config = ToolkitConfig::load(&path).unwrap();
        assert_eq!(config.empty_containers, EmptyContainers::Preserve);
        assert_eq!(config.conflicts, ConflictPolicy::Overwrite);
        assert!(config.logger().enabled(Severity::Info));
        assert!(!config.logger().enabled(Severity::Trace));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("treepath.json");
        fs::write(&path, r#"{"conflict": "overwrite"}"#).unwrap();

        let err = ToolkitConfig::load(&path).unwrap_err();
        assert_eq!(err.code(), "TREEPATH_CONFIG_INVALID");
        assert!(err.to_string().contains("conflict"));
    }

    #[test]
    fn test_bad_value_rejected() {
        assert!(ToolkitConfig::from_json_str(r#"{"empty_containers": "keep"}"#).is_err());
        assert!(ToolkitConfig::from_json_str(r#"{"log_level": "debug"}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = ToolkitConfig::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "TREEPATH_CONFIG_IO");
    }

    #[test]
    fn test_builders() {
        let config = ToolkitConfig::default()
            .with_empty_containers(EmptyContainers::Preserve)
            .with_conflicts(ConflictPolicy::Overwrite)
            .with_logging(Severity::Error);
        assert_eq!(config.empty_containers, EmptyContainers::Preserve);
        assert_eq!(config.conflicts, ConflictPolicy::Overwrite);
        assert!(config.logger().enabled(Severity::Error));
        assert!(!config.logger().enabled(Severity::Warn));
    }
}
