//! Configuration for landmark rule evaluation.
//!
//! Load finder configuration from TOML or YAML files to control how
//! ambiguous or failed detections are handled without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use landmark_config::{AmbiguityPolicy, FinderConfig, UnresolvedPolicy};
//!
//! let config = FinderConfig::from_toml_str(r#"
//!     ambiguity = "lowest_index"
//!     unresolved = "zero_index"
//!     median_fallback = true
//!     threads = 4
//! "#).unwrap();
//!
//! assert_eq!(config.ambiguity, AmbiguityPolicy::LowestIndex);
//! assert_eq!(config.unresolved, UnresolvedPolicy::ZeroIndex);
//! assert!(config.median_fallback);
//! assert!(config.parallel);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use landmark_config::FinderConfig;
//!
//! let config = FinderConfig::load("landmarks.toml").unwrap_or_default();
//! // Strict defaults: ambiguity and failures are reported
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Landmark finder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FinderConfig {
    /// What to do when several candidates survive a rule set.
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,

    /// What to do when a nucleus landmark cannot be resolved.
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,

    /// Retry a failed median evaluation of the reference landmark only,
    /// using the longest-axis rule set. Other landmarks are never retried.
    #[serde(default)]
    pub median_fallback: bool,

    /// Evaluate nuclei in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker threads for parallel evaluation; `None` uses the global pool.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_parallel() -> bool {
    true
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::default(),
            unresolved: UnresolvedPolicy::default(),
            median_fallback: false,
            parallel: true,
            threads: None,
        }
    }
}

impl FinderConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::Invalid(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the ambiguity policy.
    pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    /// Sets the unresolved-landmark policy.
    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    /// Enables or disables the longest-axis median fallback.
    pub fn with_median_fallback(mut self, enabled: bool) -> Self {
        self.median_fallback = enabled;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Handling of rule sets that leave more than one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Report an ambiguous match as an error.
    #[default]
    Reject,

    /// Take the lowest surviving index.
    LowestIndex,
}

/// Handling of landmarks that cannot be located in a nucleus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Leave the landmark unresolved and report the error.
    #[default]
    Report,

    /// Place the landmark at index 0 of the nucleus profile.
    ZeroIndex,
}

#[cfg(test)]
mod tests;
