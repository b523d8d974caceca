//! The closed rule taxonomy.
//!
//! Every rule is a variant of [`RuleKind`]. Tier, name, points, feedback and
//! pattern source are all resolved through exhaustive matches, so adding a
//! variant cannot compile until every one of them is filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat penalty applied by every hard trigger.
pub const HARD_PENALTY: i32 = -10;

/// Flat penalty applied by every (non-exempted) soft trigger.
pub const SOFT_PENALTY: i32 = -5;

/// Points for a non-blank line that matched no rule.
pub const DEFAULT_VALID_POINTS: i32 = 5;

/// Feedback for a non-blank line that matched no rule.
pub const DEFAULT_VALID_FEEDBACK: &str = "Observation recorded.";

/// Evaluation tier of a rule. Tiers are evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Definite interpretation; always penalized, even inside quotations.
    HardTrigger,
    /// Probable interpretation; penalized unless the line cites quoted wording.
    SoftTrigger,
    /// Strong observational technique; rewarded.
    BonusPattern,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::HardTrigger => "hard",
            Tier::SoftTrigger => "soft",
            Tier::BonusPattern => "bonus",
        };
        f.write_str(label)
    }
}

/// A single interpretation-detection or observation-reward rule.
///
/// Variants are listed in evaluation order: hard triggers, then the soft
/// trigger, then bonus patterns in descending priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    // Hard triggers
    MeaningClaim,
    TheologyImport,
    MotiveAttribution,
    MoralEvaluation,
    IdentificationClaim,
    DateInterpretation,

    // Soft triggers
    EmotionalLanguage,

    // Bonus patterns
    QuoteCitation,
    AgencyObservation,
    SequenceObservation,
    CountObservation,
    EntityCountObservation,
    StructuralObservation,
}

impl RuleKind {
    /// All rules in evaluation order.
    pub const ALL: [RuleKind; 13] = [
        RuleKind::MeaningClaim,
        RuleKind::TheologyImport,
        RuleKind::MotiveAttribution,
        RuleKind::MoralEvaluation,
        RuleKind::IdentificationClaim,
        RuleKind::DateInterpretation,
        RuleKind::EmotionalLanguage,
        RuleKind::QuoteCitation,
        RuleKind::AgencyObservation,
        RuleKind::SequenceObservation,
        RuleKind::CountObservation,
        RuleKind::EntityCountObservation,
        RuleKind::StructuralObservation,
    ];

    /// Stable snake_case name, used in results and config keys.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::MeaningClaim => "meaning_claim",
            RuleKind::TheologyImport => "theology_import",
            RuleKind::MotiveAttribution => "motive_attribution",
            RuleKind::MoralEvaluation => "moral_evaluation",
            RuleKind::IdentificationClaim => "identification_claim",
            RuleKind::DateInterpretation => "date_interpretation",
            RuleKind::EmotionalLanguage => "emotional_language",
            RuleKind::QuoteCitation => "quote_citation",
            RuleKind::AgencyObservation => "agency_observation",
            RuleKind::SequenceObservation => "sequence_observation",
            RuleKind::CountObservation => "count_observation",
            RuleKind::EntityCountObservation => "entity_count_observation",
            RuleKind::StructuralObservation => "structural_observation",
        }
    }

    /// Look a rule up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn tier(self) -> Tier {
        match self {
            RuleKind::MeaningClaim
            | RuleKind::TheologyImport
            | RuleKind::MotiveAttribution
            | RuleKind::MoralEvaluation
            | RuleKind::IdentificationClaim
            | RuleKind::DateInterpretation => Tier::HardTrigger,
            RuleKind::EmotionalLanguage => Tier::SoftTrigger,
            RuleKind::QuoteCitation
            | RuleKind::AgencyObservation
            | RuleKind::SequenceObservation
            | RuleKind::CountObservation
            | RuleKind::EntityCountObservation
            | RuleKind::StructuralObservation => Tier::BonusPattern,
        }
    }

    /// Point delta awarded when this rule decides a line.
    pub fn points(self) -> i32 {
        match self {
            RuleKind::MeaningClaim
            | RuleKind::TheologyImport
            | RuleKind::MotiveAttribution
            | RuleKind::MoralEvaluation
            | RuleKind::IdentificationClaim
            | RuleKind::DateInterpretation => HARD_PENALTY,
            RuleKind::EmotionalLanguage => SOFT_PENALTY,
            RuleKind::QuoteCitation => 20,
            RuleKind::AgencyObservation | RuleKind::SequenceObservation => 15,
            RuleKind::CountObservation
            | RuleKind::EntityCountObservation
            | RuleKind::StructuralObservation => 10,
        }
    }

    /// Whether the rule additionally requires a quoted span on the line.
    pub fn requires_quote(self) -> bool {
        matches!(self, RuleKind::QuoteCitation)
    }

    /// Built-in feedback shown to the learner when this rule decides a line.
    pub fn feedback(self) -> &'static str {
        match self {
            RuleKind::MeaningClaim => {
                "Interpretation detected: claiming what the text means or represents goes beyond what it says. State only what is written."
            }
            RuleKind::TheologyImport => {
                "Interpretation detected: doctrinal vocabulary imports a conclusion the wording does not contain. Use the passage's own words."
            }
            RuleKind::MotiveAttribution => {
                "Interpretation detected: the text does not tell you what anyone intended, wanted, or believed. Record actions and words instead."
            }
            RuleKind::MoralEvaluation => {
                "Interpretation detected: moral judgment is an evaluation, not an observation. Describe what happens without grading it."
            }
            RuleKind::IdentificationClaim => {
                "Interpretation detected: naming what a symbol stands for is identification, not observation. Describe the image as written."
            }
            RuleKind::DateInterpretation => {
                "Interpretation detected: calculating dates or timelines from numbers is interpretation. Note the number as it appears."
            }
            RuleKind::EmotionalLanguage => {
                "Caution: emotional language describes your reading, not the text. Quote the passage if it uses this wording."
            }
            RuleKind::QuoteCitation => {
                "Excellent: you cited the exact wording and where it appears."
            }
            RuleKind::AgencyObservation => {
                "Great observation: you isolated who performs the actions."
            }
            RuleKind::SequenceObservation => {
                "Great observation: you noted the order in which things happen."
            }
            RuleKind::CountObservation => "Good observation: counting is a precise way to see the text.",
            RuleKind::EntityCountObservation => {
                "Good observation: you identified the distinct people or objects present."
            }
            RuleKind::StructuralObservation => {
                "Good observation: you noted where something sits in the passage."
            }
        }
    }

    /// Built-in regex source for the rule's predicate (compiled case-insensitively).
    pub fn pattern(self) -> &'static str {
        match self {
            RuleKind::MeaningClaim => {
                r"\b(?:means|meant|represents?|represented|representing|symboli[sz](?:es|ed|ing|e)|points?\s+to|pointed\s+to|signif(?:y|ies|ied|ying)|typif(?:y|ies|ied|ying)|foreshadow(?:s|ed|ing)?)\b"
            }
            RuleKind::TheologyImport => {
                r"\b(?:grace|atonement|atoning|justification|sanctification|sanctified|salvation|redemption|redemptive|propitiation|regeneration|substitutionary|predestination|incarnation|original\s+sin)\b"
            }
            RuleKind::MotiveAttribution => {
                r"\b(?:intended|intends|intending|wanted|wants\s+to|hoped|hopes\s+to|believed|believes\s+that|felt\s+that|knew\s+that|thought\s+that|realized\s+that|desired|longed)\b"
            }
            RuleKind::MoralEvaluation => {
                r"\b(?:sinful|righteous|unrighteous|evil|holy|unholy|cursed|pure|impure|wicked|godly|ungodly|virtuous|immoral|shameful)\b"
            }
            RuleKind::IdentificationClaim => {
                // Either order: "the fourth beast is Rome" or "Rome is the fourth beast".
                r"\b(?:beasts?|horns?|dragons?|harlots?|whores?|statues?|images?|heads?|kingdoms?|seals?|trumpets?|locusts?|woman)\b[^.;]*?\b(?:is|are|was|were|stands?\s+for|refers?\s+to)\s+(?:the\s+)?(?:roman\s+empire|rome|babylon|papacy|pope|antichrist|united\s+states|america|european\s+union|catholic\s+church|medo-persia|persia|greece|ottoman\s+empire|napoleon)\b|\b(?:roman\s+empire|rome|babylon|papacy|pope|antichrist|united\s+states|america|european\s+union|catholic\s+church|medo-persia|persia|greece|ottoman\s+empire|napoleon)\s+(?:is|are|was|were|stands?\s+for|represents?)\s+(?:(?:the|a|an)\s+)?(?:[\w-]+\s+){0,3}?(?:beasts?|horns?|dragons?|harlots?|whores?|statues?|images?|heads?|kingdoms?|seals?|trumpets?|locusts?|woman)\b"
            }
            RuleKind::DateInterpretation => {
                r"(?:\bday[\s-]+for[\s-]+a[\s-]+year\b|\byear[\s-]+for[\s-]+a[\s-]+day\b|\bprophetic\s+(?:days?|years?|weeks?|times?|timelines?|calendar)\b|\bfulfilled\s+in\s+(?:a\.?d\.?\s*)?\d{3,4}\b|\b\d{3,4}\s*(?:a\.d\.|b\.c\.|ad\b|bc\b|bce\b|ce\b)|\ba\.?d\.?\s*\d{3,4}\b|\b\d{3,4}\s+(?:days|years)\s+(?:later\s+)?(?:ended|began|ends|begins|reached|reaches)\b)"
            }
            RuleKind::EmotionalLanguage => {
                r"\b(?:feel|feels|feeling|feelings|felt|heart|hearts|hearted|love|loved|loves|loving|anger|angry|joy|joyful|sad|sadness|happy|happiness|afraid|fear|feared|fearful|grief|grieved|sorrow|sorrowful|lonely|upset)\b"
            }
            RuleKind::QuoteCitation => {
                r"\b(?:appears?|appeared|occurs?|occurred|(?:is|are|was|were)\s+(?:used|mentioned|repeated))\b"
            }
            RuleKind::AgencyObservation => {
                r"\b(?:all|only|every|no)\s+(?:of\s+)?(?:the\s+)?(?:actions?|verbs?|deeds?|commands?|acts?|speech|speaking|initiative|movement)\b[^.;]*?\b(?:are|is|was|were|by|from)\b"
            }
            RuleKind::SequenceObservation => {
                r"\b(?:before|after|afterwards?|then|first|finally|precedes?|preceded|preceding|follows?|followed|following)\b"
            }
            RuleKind::CountObservation => {
                r"\b(?:(?:\d+|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s+(?:different\s+|distinct\s+|separate\s+)?(?:verbs?|actions?|characters?|words?|times|occurrences?|commands?|questions?|names?)|once|twice|thrice)\b"
            }
            RuleKind::EntityCountObservation => {
                r"\b(?:(?:\d+|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s+(?:different\s+|distinct\s+|separate\s+)?(?:people|persons?|m[ae]n|wom[ae]n|individuals?|figures?|objects?|items?|animals?|groups?|speakers?|participants?|nations?|city|cities|places?)|(?:distinct|separate|different)\s+(?:characters?|persons?|people|individuals|objects|entities|speakers))\b"
            }
            RuleKind::StructuralObservation => {
                r"\b(?:beginning|middle|end|ending|opens\s+with|closes\s+with|appears|(?:is|are)\s+(?:mentioned|written|repeated))\b"
            }
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
