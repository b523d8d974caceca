//! Configuration defaults for obsgrade.
//!
//! Default value functions used by the Config struct, kept separate so serde
//! and `Config::default()` agree.

use crate::quotation::DEFAULT_CITATION_KEYWORDS;

/// Generic message substituted when a rule's feedback resolves to empty.
pub const DEFAULT_FALLBACK_FEEDBACK: &str = "Observation flagged by rule review.";

/// Default citation keywords for the quotation exemption.
pub fn default_citation_keywords() -> Vec<String> {
    DEFAULT_CITATION_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

pub(crate) fn default_fallback_feedback() -> String {
    DEFAULT_FALLBACK_FEEDBACK.to_string()
}
