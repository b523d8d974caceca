//! Single-line decision procedure.

use crate::rules::{RuleRegistry, Tier};

use super::types::ClassificationResult;

/// Classify one line of text.
///
/// Evaluation is a fixed total order and always yields exactly one result:
/// 1. Blank after trimming: neutral, 0 points, no feedback
/// 2. Hard triggers, in registry order (never exempted by quotation)
/// 3. Soft triggers, unless the line quotes and cites its wording
/// 4. Bonus patterns, in descending priority
/// 5. Otherwise default-valid
///
/// # Example
///
/// ```
/// use obsgrade::classify::{OutcomeType, classify_line};
/// use obsgrade::rules::RuleRegistry;
///
/// let registry = RuleRegistry::builtin();
///
/// let result = classify_line(&registry, "This represents God's mercy.");
/// assert_eq!(result.outcome_type, OutcomeType::HardPenalty);
/// assert_eq!(result.points, -10);
/// ```
pub fn classify_line(registry: &RuleRegistry, text: &str) -> ClassificationResult {
    let line = text.trim();

    if line.is_empty() {
        return ClassificationResult::neutral();
    }

    if let Some(rule) = registry.first_match(Tier::HardTrigger, line) {
        return decided(ClassificationResult::matched(rule));
    }

    if registry.quotation().is_exempt(line) {
        tracing::trace!("soft tier skipped: quoted wording with citation keyword");
    } else if let Some(rule) = registry.first_match(Tier::SoftTrigger, line) {
        return decided(ClassificationResult::matched(rule));
    }

    if let Some(rule) = registry.first_match(Tier::BonusPattern, line) {
        return decided(ClassificationResult::matched(rule));
    }

    decided(ClassificationResult::default_valid())
}

fn decided(result: ClassificationResult) -> ClassificationResult {
    tracing::debug!(
        outcome = %result.outcome_type,
        rule = result.matched_rule.map(|k| k.name()).unwrap_or("none"),
        points = result.points,
        "line classified"
    );
    result
}
