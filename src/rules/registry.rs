//! Compiled, immutable rule registry.

use crate::config::Config;
use crate::error::{ObsError, Result};
use crate::quotation::QuotationDetector;
use regex::{Regex, RegexBuilder};

use super::kind::{RuleKind, Tier};

/// A rule with its predicate compiled and its feedback resolved.
pub struct CompiledRule {
    kind: RuleKind,
    /// Compiled patterns paired with their source strings. Any match counts.
    patterns: Vec<(Regex, String)>,
    feedback: String,
}

impl std::fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledRule")
            .field("kind", &self.kind)
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .field("feedback", &self.feedback)
            .finish()
    }
}

impl CompiledRule {
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn tier(&self) -> Tier {
        self.kind.tier()
    }

    pub fn points(&self) -> i32 {
        self.kind.points()
    }

    /// Feedback after config overrides and the empty-template fallback.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Source strings of every pattern in this rule's predicate.
    pub fn pattern_sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(_, s)| s.as_str())
    }

    /// Whether any of the rule's patterns matches the line.
    pub fn is_match(&self, line: &str) -> bool {
        self.patterns.iter().any(|(regex, _)| regex.is_match(line))
    }
}

/// The immutable rule taxonomy plus the quotation detector it relies on.
///
/// Build once with [`RuleRegistry::from_config`] or [`RuleRegistry::builtin`]
/// and share by reference; it holds no interior mutability and is
/// `Send + Sync`.
#[derive(Debug)]
pub struct RuleRegistry {
    /// Rules in evaluation order (see [`RuleKind::ALL`]).
    rules: Vec<CompiledRule>,
    quotation: QuotationDetector,
}

impl RuleRegistry {
    /// Compile the registry from configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(RuleRegistry)` - Every built-in and extra pattern compiled
    /// * `Err(ObsError::ConfigError)` - The config failed validation or an
    ///   extra pattern is not a valid regex
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut rules = Vec::with_capacity(RuleKind::ALL.len());

        for kind in RuleKind::ALL {
            let mut patterns = vec![(compile(kind, kind.pattern())?, kind.pattern().to_string())];

            if let Some(extra) = config.extra_patterns.get(kind.name()) {
                for source in extra {
                    patterns.push((compile(kind, source)?, source.clone()));
                }
            }

            rules.push(CompiledRule {
                kind,
                patterns,
                feedback: resolve_feedback(kind, config),
            });
        }

        let quotation = QuotationDetector::new(&config.citation_keywords)?;

        tracing::debug!(
            rules = rules.len(),
            extra_patterns = config.extra_patterns.values().map(Vec::len).sum::<usize>(),
            feedback_overrides = config.feedback.len(),
            "rule registry compiled"
        );

        Ok(Self { rules, quotation })
    }

    /// The registry with built-in patterns, feedback and citation keywords.
    ///
    /// # Panics
    ///
    /// Only if a built-in pattern fails to compile, which the test suite rules out.
    pub fn builtin() -> Self {
        Self::from_config(&Config::default()).expect("built-in rule patterns must compile")
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Look up a compiled rule by kind.
    pub fn rule(&self, kind: RuleKind) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }

    pub fn quotation(&self) -> &QuotationDetector {
        &self.quotation
    }

    /// First rule of `tier`, in registry order, whose predicate holds for the line.
    ///
    /// Rules that require a quote (see [`RuleKind::requires_quote`]) only
    /// match when the line also contains a quoted span.
    pub fn first_match(&self, tier: Tier, line: &str) -> Option<&CompiledRule> {
        self.rules
            .iter()
            .filter(|rule| rule.tier() == tier)
            .find(|rule| {
                rule.is_match(line)
                    && (!rule.kind.requires_quote() || self.quotation.has_quoted_span(line))
            })
    }
}

fn compile(kind: RuleKind, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            ObsError::ConfigError(format!(
                "invalid regex pattern for rule '{}': '{}' - {}\n\
                 Fix: edit extra_patterns in the config file and correct or remove this pattern.",
                kind.name(),
                source,
                e
            ))
        })
}

/// Configured override if present, else the built-in template; an empty
/// result falls back to the configured generic message.
fn resolve_feedback(kind: RuleKind, config: &Config) -> String {
    let template = config
        .feedback
        .get(kind.name())
        .map(String::as_str)
        .unwrap_or(kind.feedback());

    if template.trim().is_empty() {
        config.fallback_feedback.clone()
    } else {
        template.to_string()
    }
}
