//! Core types for line classification results.

use crate::rules::{CompiledRule, DEFAULT_VALID_FEEDBACK, DEFAULT_VALID_POINTS, RuleKind, Tier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of outcome decided a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeType {
    /// Blank line or an observation that matched no rule.
    Valid,
    HardPenalty,
    SoftWarning,
    Bonus,
}

impl OutcomeType {
    /// Outcome produced when a rule of the given tier decides a line.
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::HardTrigger => OutcomeType::HardPenalty,
            Tier::SoftTrigger => OutcomeType::SoftWarning,
            Tier::BonusPattern => OutcomeType::Bonus,
        }
    }

    /// Penalties are the only invalid outcomes.
    pub fn is_valid(self) -> bool {
        !matches!(self, OutcomeType::HardPenalty | OutcomeType::SoftWarning)
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeType::Valid => "VALID",
            OutcomeType::HardPenalty => "HARD",
            OutcomeType::SoftWarning => "SOFT",
            OutcomeType::Bonus => "BONUS",
        };
        f.write_str(label)
    }
}

/// The single outcome assigned to one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// `false` exactly when the outcome is a penalty.
    pub valid: bool,
    pub outcome_type: OutcomeType,
    /// Point delta for this line.
    pub points: i32,
    /// Learner-facing feedback; empty only for blank lines.
    pub feedback: String,
    /// Rule that decided the line, if any.
    pub matched_rule: Option<RuleKind>,
}

impl ClassificationResult {
    /// Result for a line that is empty after trimming.
    pub fn neutral() -> Self {
        Self {
            valid: true,
            outcome_type: OutcomeType::Valid,
            points: 0,
            feedback: String::new(),
            matched_rule: None,
        }
    }

    /// Result for a non-blank line that matched no rule.
    pub fn default_valid() -> Self {
        Self {
            valid: true,
            outcome_type: OutcomeType::Valid,
            points: DEFAULT_VALID_POINTS,
            feedback: DEFAULT_VALID_FEEDBACK.to_string(),
            matched_rule: None,
        }
    }

    /// Result for a line decided by `rule`.
    pub fn matched(rule: &CompiledRule) -> Self {
        let outcome_type = OutcomeType::for_tier(rule.tier());
        Self {
            valid: outcome_type.is_valid(),
            outcome_type,
            points: rule.points(),
            feedback: rule.feedback().to_string(),
            matched_rule: Some(rule.kind()),
        }
    }
}
