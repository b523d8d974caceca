//! Pattern registry: the immutable rule taxonomy.
//!
//! Rules fall into three tiers evaluated in a fixed order:
//! - Hard triggers: definite interpretation, penalized even inside quotations
//! - Soft triggers: emotional characterization, exempt when quoted and cited
//! - Bonus patterns: rewarded observational technique, by descending priority

mod kind;
mod registry;

#[cfg(test)]
mod tests;

pub use kind::{
    DEFAULT_VALID_FEEDBACK, DEFAULT_VALID_POINTS, HARD_PENALTY, RuleKind, SOFT_PENALTY, Tier,
};
pub use registry::{CompiledRule, RuleRegistry};
