//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the observation grading engine.
///
/// Read once at startup and turned into an immutable
/// [`RuleRegistry`](crate::rules::RuleRegistry). Unknown fields in the YAML
/// are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Quotation exemption
    // =========================================================================
    /// Keywords that, together with a quoted span, exempt a line from soft triggers.
    #[serde(default = "default_citation_keywords")]
    pub citation_keywords: Vec<String>,

    // =========================================================================
    // Feedback
    // =========================================================================
    /// Message used when a rule's feedback template is empty.
    #[serde(default = "default_fallback_feedback")]
    pub fallback_feedback: String,

    /// Per-rule feedback overrides, keyed by rule name (e.g. `meaning_claim`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub feedback: BTreeMap<String, String>,

    // =========================================================================
    // Patterns
    // =========================================================================
    /// Additional regex patterns per rule name, OR-ed with the built-in predicate.
    ///
    /// Patterns are compiled case-insensitively.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_patterns: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            citation_keywords: default_citation_keywords(),
            fallback_feedback: default_fallback_feedback(),
            feedback: BTreeMap::new(),
            extra_patterns: BTreeMap::new(),
        }
    }
}
