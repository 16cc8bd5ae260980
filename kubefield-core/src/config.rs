//! Configuration management for kubefield
//!
//! Settings are resolved from:
//! 1. Environment variables (highest priority)
//! 2. Configuration file (TOML format)
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KubefieldConfig {
    /// Cluster connection settings
    pub cluster: ClusterConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Cluster connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Kubeconfig file; inferred from the environment when unset
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context; the current context when unset
    pub context: Option<String>,
    /// Namespace used when a command names none
    pub default_namespace: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Directory for daily-rotated log files
    pub log_dir: Option<PathBuf>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            default_namespace: "default".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            log_dir: None,
        }
    }
}

impl KubefieldConfig {
    /// Load configuration from environment variables and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            std::env::var("KUBEFIELD_CONFIG").ok().map(PathBuf::from),
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config/kubefield/config.toml")),
            Some(PathBuf::from("./kubefield.toml")),
        ];

        paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply overrides, reading variables through `var`
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var("KUBEFIELD_KUBECONFIG") {
            self.cluster.kubeconfig = Some(PathBuf::from(path));
        }
        if let Some(context) = var("KUBEFIELD_CONTEXT") {
            self.cluster.context = Some(context);
        }
        if let Some(namespace) = var("KUBEFIELD_NAMESPACE") {
            self.cluster.default_namespace = namespace;
        }

        if let Some(level) = var("KUBEFIELD_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(json) = var("KUBEFIELD_LOG_JSON") {
            self.logging.json = json.parse().unwrap_or(self.logging.json);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster.default_namespace.is_empty() {
            return Err(ConfigError::Validation(
                "Default namespace cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read config file {0:?}: {1}")]
    FileRead(PathBuf, String),
    /// Failed to parse configuration
    #[error("Failed to parse config: {0}")]
    Parse(String),
    /// Configuration validation failed
    #[error("Config validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = KubefieldConfig::default();
        assert_eq!(config.cluster.default_namespace, "default");
        assert_eq!(config.cluster.kubeconfig, None);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[cluster]
kubeconfig = "/etc/kubefield/kubeconfig"
default_namespace = "apps"

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = KubefieldConfig::load_from_file(file.path()).unwrap();
        assert_eq!(
            config.cluster.kubeconfig,
            Some(PathBuf::from("/etc/kubefield/kubeconfig"))
        );
        assert_eq!(config.cluster.context, None);
        assert_eq!(config.cluster.default_namespace, "apps");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_errors() {
        let err = KubefieldConfig::load_from_file(Path::new("/nonexistent/kubefield.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_, _)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[cluster\nbroken").unwrap();
        let err = KubefieldConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("KUBEFIELD_CONTEXT", "prod"),
            ("KUBEFIELD_NAMESPACE", "platform"),
            ("KUBEFIELD_LOG_LEVEL", "WARN"),
            ("KUBEFIELD_LOG_JSON", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = KubefieldConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.cluster.context.as_deref(), Some("prod"));
        assert_eq!(config.cluster.default_namespace, "platform");
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
        assert_eq!(config.cluster.kubeconfig, None);
    }

    #[test]
    fn test_config_validation() {
        let mut config = KubefieldConfig::default();
        config.cluster.default_namespace = String::new();
        assert!(config.validate().is_err());

        let mut config = KubefieldConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
