//! Multi-line submission scoring.
//!
//! A submission is split into lines; lines that are blank after trimming are
//! dropped before classification, so they never appear in the per-line
//! results and contribute nothing to the totals.

use crate::classify::{ClassificationResult, classify_line};
use crate::rules::RuleRegistry;
use serde::{Deserialize, Serialize};

/// Scored submission: one result per non-blank line plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub per_line: Vec<ClassificationResult>,
    /// Exact sum of `per_line[*].points`.
    ///
    /// Each line moves the total by at most 20, so `i32` holds any
    /// submission below roughly 10^8 lines.
    pub total_points: i32,
    /// Results whose `valid` flag is true.
    pub valid_count: usize,
    /// Results whose `valid` flag is false.
    pub penalty_count: usize,
}

impl AggregateResult {
    /// Build an aggregate from per-line results, deriving all totals.
    pub fn from_results(per_line: Vec<ClassificationResult>) -> Self {
        let total_points = per_line.iter().map(|r| r.points).sum();
        let valid_count = per_line.iter().filter(|r| r.valid).count();
        let penalty_count = per_line.len() - valid_count;

        Self {
            per_line,
            total_points,
            valid_count,
            penalty_count,
        }
    }

    pub fn has_penalties(&self) -> bool {
        self.penalty_count > 0
    }

    /// Format the result as a plain-text report.
    ///
    /// ```text
    /// BONUS  +20  quote_citation  Excellent: you cited the exact wording ...
    /// SOFT    -5  emotional_language  Caution: emotional language ...
    ///
    /// Total: 15 points (1 valid, 1 penalized)
    /// ```
    pub fn format_report(&self) -> String {
        let mut msg = String::new();

        for result in &self.per_line {
            let rule = result.matched_rule.map(|k| k.name()).unwrap_or("-");
            msg.push_str(&format!(
                "{:<5} {:>+4}  {}  {}\n",
                result.outcome_type.to_string(),
                result.points,
                rule,
                result.feedback
            ));
        }

        if !self.per_line.is_empty() {
            msg.push('\n');
        }

        msg.push_str(&format!(
            "Total: {} points ({} valid, {} penalized)\n",
            self.total_points, self.valid_count, self.penalty_count
        ));

        msg
    }
}

/// Classify every non-blank line of a submission independently.
///
/// # Example
///
/// ```
/// use obsgrade::aggregate::classify_submission;
/// use obsgrade::rules::RuleRegistry;
///
/// let registry = RuleRegistry::builtin();
/// let result = classify_submission(&registry, "He felt sad.\n\nThree verbs describe his actions.");
///
/// assert_eq!(result.per_line.len(), 2);
/// assert_eq!(result.total_points, 5);
/// assert_eq!(result.penalty_count, 1);
/// ```
pub fn classify_submission(registry: &RuleRegistry, text: &str) -> AggregateResult {
    let per_line: Vec<ClassificationResult> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| classify_line(registry, line))
        .collect();

    let result = AggregateResult::from_results(per_line);

    tracing::debug!(
        lines = result.per_line.len(),
        total_points = result.total_points,
        penalties = result.penalty_count,
        "submission scored"
    );

    result
}
