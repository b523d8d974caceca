//! Tests for the pattern registry.

use crate::config::Config;
use crate::error::ObsError;

use super::{HARD_PENALTY, RuleKind, RuleRegistry, SOFT_PENALTY, Tier};

// =========================================================================
// Helper functions
// =========================================================================

fn config_with_extra(rule: &str, patterns: Vec<&str>) -> Config {
    let mut config = Config::default();
    config.extra_patterns.insert(
        rule.to_string(),
        patterns.into_iter().map(String::from).collect(),
    );
    config
}

fn matches(registry: &RuleRegistry, kind: RuleKind, line: &str) -> bool {
    registry.rule(kind).unwrap().is_match(line)
}

// =========================================================================
// Taxonomy shape
// =========================================================================

#[test]
fn test_builtin_registry_compiles_every_rule() {
    let registry = RuleRegistry::builtin();
    assert_eq!(registry.rules().len(), RuleKind::ALL.len());
}

#[test]
fn test_registry_order_matches_declaration() {
    let registry = RuleRegistry::builtin();
    let kinds: Vec<RuleKind> = registry.rules().iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, RuleKind::ALL.to_vec());
}

/// Tiers appear as one contiguous block each: hard, then soft, then bonus.
#[test]
fn test_tiers_are_contiguous_and_ordered() {
    let tiers: Vec<Tier> = RuleKind::ALL.iter().map(|k| k.tier()).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);
}

#[test]
fn test_bonus_priority_is_descending_by_points() {
    let bonus: Vec<i32> = RuleKind::ALL
        .iter()
        .filter(|k| k.tier() == Tier::BonusPattern)
        .map(|k| k.points())
        .collect();
    assert_eq!(bonus, vec![20, 15, 15, 10, 10, 10]);
}

#[test]
fn test_points_by_tier() {
    for kind in RuleKind::ALL {
        match kind.tier() {
            Tier::HardTrigger => assert_eq!(kind.points(), HARD_PENALTY),
            Tier::SoftTrigger => assert_eq!(kind.points(), SOFT_PENALTY),
            Tier::BonusPattern => assert!(kind.points() > 0),
        }
    }
}

#[test]
fn test_names_roundtrip_and_are_unique() {
    for kind in RuleKind::ALL {
        assert_eq!(RuleKind::from_name(kind.name()), Some(kind));
        assert!(!kind.feedback().is_empty(), "{} has no feedback", kind);
    }
    assert_eq!(RuleKind::from_name("nonexistent"), None);
}

#[test]
fn test_rule_kind_serializes_as_name() {
    let json = serde_json::to_string(&RuleKind::EntityCountObservation).unwrap();
    assert_eq!(json, "\"entity_count_observation\"");
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RuleRegistry>();
}

// =========================================================================
// Hard trigger predicates
// =========================================================================

#[test]
fn test_meaning_claim_variants() {
    let registry = RuleRegistry::builtin();
    for line in [
        "This represents God's mercy.",
        "The lamb symbolizes innocence.",
        "The rainbow points to a promise.",
        "Water signifies cleansing.",
        "Joseph typifies a later figure.",
        "The flood foreshadows judgment.",
        "This means he was chosen.",
    ] {
        assert!(matches(&registry, RuleKind::MeaningClaim, line), "{line}");
    }
    assert!(!matches(&registry, RuleKind::MeaningClaim, "He walked to the well."));
}

#[test]
fn test_theology_import_terms() {
    let registry = RuleRegistry::builtin();
    for line in [
        "This passage is about grace.",
        "The sacrifice provides atonement.",
        "Salvation comes through the gate.",
        "Redemption is pictured here.",
    ] {
        assert!(matches(&registry, RuleKind::TheologyImport, line), "{line}");
    }
    assert!(!matches(&registry, RuleKind::TheologyImport, "Grapes grow on the vine."));
}

#[test]
fn test_motive_attribution_terms() {
    let registry = RuleRegistry::builtin();
    for line in [
        "Abraham intended to obey.",
        "She wanted to leave.",
        "He felt that the king was wrong.",
        "They knew that the river would rise.",
    ] {
        assert!(matches(&registry, RuleKind::MotiveAttribution, line), "{line}");
    }
    assert!(!matches(&registry, RuleKind::MotiveAttribution, "He felt sad."));
}

#[test]
fn test_moral_evaluation_terms() {
    let registry = RuleRegistry::builtin();
    assert!(matches(&registry, RuleKind::MoralEvaluation, "The king was evil."));
    assert!(matches(&registry, RuleKind::MoralEvaluation, "Noah was righteous."));
    assert!(!matches(&registry, RuleKind::MoralEvaluation, "The water was purely cold."));
}

#[test]
fn test_identification_claim_needs_symbol_and_power() {
    let registry = RuleRegistry::builtin();
    assert!(matches(
        &registry,
        RuleKind::IdentificationClaim,
        "The little horn is the papacy."
    ));
    assert!(matches(
        &registry,
        RuleKind::IdentificationClaim,
        "The fourth beast was Rome."
    ));
    assert!(matches(
        &registry,
        RuleKind::IdentificationClaim,
        "Rome is the fourth beast."
    ));
    assert!(matches(
        &registry,
        RuleKind::IdentificationClaim,
        "Babylon is the harlot."
    ));
    assert!(matches(
        &registry,
        RuleKind::IdentificationClaim,
        "The papacy was the little horn of chapter 7."
    ));
    assert!(!matches(
        &registry,
        RuleKind::IdentificationClaim,
        "Babylon is mentioned in verse 4."
    ));
    assert!(!matches(
        &registry,
        RuleKind::IdentificationClaim,
        "The beast has ten horns."
    ));
}

#[test]
fn test_date_interpretation_claims() {
    let registry = RuleRegistry::builtin();
    for line in [
        "Using the day-for-a-year principle, this lasts 1260 years.",
        "These are prophetic days.",
        "It was fulfilled in 1798.",
        "The period began in 538 AD.",
        "The 2300 days ended in 1844.",
    ] {
        assert!(matches(&registry, RuleKind::DateInterpretation, line), "{line}");
    }
    assert!(!matches(
        &registry,
        RuleKind::DateInterpretation,
        "The word 'ran' appears in verse 20."
    ));
    assert!(!matches(
        &registry,
        RuleKind::DateInterpretation,
        "The number 1260 appears in verse 6."
    ));
}

// =========================================================================
// Soft and bonus predicates
// =========================================================================

#[test]
fn test_emotional_language_terms() {
    let registry = RuleRegistry::builtin();
    assert!(matches(&registry, RuleKind::EmotionalLanguage, "He felt sad."));
    assert!(matches(&registry, RuleKind::EmotionalLanguage, "Her heart was heavy."));
    assert!(!matches(&registry, RuleKind::EmotionalLanguage, "The hearth was lit."));
}

#[test]
fn test_quote_citation_requires_quoted_span() {
    let registry = RuleRegistry::builtin();
    let quoted = "The word 'ran' appears in verse 20.";
    let unquoted = "The word ran appears in verse 20.";

    assert_eq!(
        registry
            .first_match(Tier::BonusPattern, quoted)
            .map(|r| r.kind()),
        Some(RuleKind::QuoteCitation)
    );
    // Without quotes the same verb falls through to the structural pattern.
    assert_eq!(
        registry
            .first_match(Tier::BonusPattern, unquoted)
            .map(|r| r.kind()),
        Some(RuleKind::StructuralObservation)
    );
}

#[test]
fn test_bonus_pattern_examples() {
    let registry = RuleRegistry::builtin();
    let cases = [
        ("Only actions by God are described.", RuleKind::AgencyObservation),
        ("All the commands come from Moses.", RuleKind::AgencyObservation),
        ("He builds the altar before the sacrifice.", RuleKind::SequenceObservation),
        ("Three verbs describe his actions.", RuleKind::CountObservation),
        ("The name Jacob occurs 4 times.", RuleKind::CountObservation),
        ("Two men stand at the door.", RuleKind::EntityCountObservation),
        ("There are three distinct objects on the table.", RuleKind::EntityCountObservation),
        ("The command sits at the end of the chapter.", RuleKind::StructuralObservation),
    ];
    for (line, expected) in cases {
        assert_eq!(
            registry
                .first_match(Tier::BonusPattern, line)
                .map(|r| r.kind()),
            Some(expected),
            "{line}"
        );
    }
}

#[test]
fn test_first_match_respects_tier_filter() {
    let registry = RuleRegistry::builtin();
    let line = "He felt sad before the meal.";
    assert_eq!(
        registry
            .first_match(Tier::SoftTrigger, line)
            .map(|r| r.kind()),
        Some(RuleKind::EmotionalLanguage)
    );
    assert!(registry.first_match(Tier::HardTrigger, line).is_none());
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn test_extra_patterns_extend_a_rule() {
    let config = config_with_extra("theology_import", vec![r"\bcovenant\b"]);
    let registry = RuleRegistry::from_config(&config).unwrap();

    assert!(matches(&registry, RuleKind::TheologyImport, "This is a COVENANT."));
    assert_eq!(
        registry
            .rule(RuleKind::TheologyImport)
            .unwrap()
            .pattern_sources()
            .count(),
        2
    );
    // Built-in registry is unaffected.
    assert!(!matches(
        &RuleRegistry::builtin(),
        RuleKind::TheologyImport,
        "This is a covenant."
    ));
}

#[test]
fn test_invalid_extra_pattern_is_config_error() {
    let config = config_with_extra("count_observation", vec!["[invalid"]);
    let err = RuleRegistry::from_config(&config).unwrap_err();

    match err {
        ObsError::ConfigError(msg) => {
            assert!(msg.contains("invalid regex pattern"));
            assert!(msg.contains("count_observation"));
            assert!(msg.contains("[invalid"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_unknown_rule_is_rejected_at_compile() {
    let config = config_with_extra("not_a_rule", vec!["x"]);
    assert!(RuleRegistry::from_config(&config).is_err());
}

#[test]
fn test_feedback_override_applies() {
    let mut config = Config::default();
    config
        .feedback
        .insert("meaning_claim".to_string(), "Custom note.".to_string());
    let registry = RuleRegistry::from_config(&config).unwrap();

    assert_eq!(
        registry.rule(RuleKind::MeaningClaim).unwrap().feedback(),
        "Custom note."
    );
    assert_eq!(
        registry.rule(RuleKind::MoralEvaluation).unwrap().feedback(),
        RuleKind::MoralEvaluation.feedback()
    );
}

/// An empty template is a configuration gap; the generic fallback is used.
#[test]
fn test_empty_feedback_override_uses_fallback() {
    let mut config = Config::default();
    config
        .feedback
        .insert("count_observation".to_string(), "   ".to_string());
    config.fallback_feedback = "Generic note.".to_string();
    let registry = RuleRegistry::from_config(&config).unwrap();

    assert_eq!(
        registry.rule(RuleKind::CountObservation).unwrap().feedback(),
        "Generic note."
    );
}

#[test]
fn test_citation_keywords_flow_into_detector() {
    let config = Config {
        citation_keywords: vec!["cites".to_string()],
        ..Default::default()
    };
    let registry = RuleRegistry::from_config(&config).unwrap();
    assert_eq!(registry.quotation().keywords(), ["cites".to_string()]);
}
