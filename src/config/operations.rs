//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{ObsError, Result};
use crate::rules::RuleKind;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ObsError::UserError)` - The file could not be read
    /// * `Err(ObsError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ObsError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ObsError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ObsError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `citation_keywords` must contain at least one non-empty entry
    /// - `fallback_feedback` must be non-empty
    /// - keys of `feedback` and `extra_patterns` must name known rules
    pub fn validate(&self) -> Result<()> {
        if self.citation_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ObsError::ConfigError(
                "config validation failed: citation_keywords must contain at least one non-empty keyword"
                    .to_string(),
            ));
        }

        if self.fallback_feedback.trim().is_empty() {
            return Err(ObsError::ConfigError(
                "config validation failed: fallback_feedback must be non-empty".to_string(),
            ));
        }

        for name in self.feedback.keys().chain(self.extra_patterns.keys()) {
            if RuleKind::from_name(name).is_none() {
                return Err(ObsError::ConfigError(format!(
                    "config validation failed: unknown rule '{}'. Known rules: {}",
                    name,
                    known_rule_names()
                )));
            }
        }

        Ok(())
    }
}

fn known_rule_names() -> String {
    RuleKind::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}
