//! Reference passage documents for decoy checking.

use crate::error::{ObsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{DecoyMatch, check_decoy_verb};

/// Verb lists for one passage, as maintained by the calling application.
///
/// ```yaml
/// reference: Genesis 24:20
/// actual_verbs: [emptied, ran, drew]
/// decoy_verbs: [walked, carried]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencePassage {
    /// Human-readable passage label (informational).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Verbs that occur in the passage.
    pub actual_verbs: Vec<String>,
    /// Plausible verbs known to be absent from the passage.
    pub decoy_verbs: Vec<String>,
}

impl ReferencePassage {
    pub fn new(actual_verbs: Vec<String>, decoy_verbs: Vec<String>) -> Self {
        Self {
            reference: None,
            actual_verbs,
            decoy_verbs,
        }
    }

    /// Load a passage from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ObsError::UserError(format!(
                "failed to read passage file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a passage from YAML. An empty document yields empty verb lists.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| ObsError::ConfigError(format!("failed to parse passage YAML: {}", e)))
    }

    /// Check one observation against this passage's verb lists.
    pub fn check(&self, observation: &str) -> Option<DecoyMatch> {
        check_decoy_verb(observation, &self.actual_verbs, &self.decoy_verbs)
    }
}
