//! obsgrade: deterministic grading of learner observations.
//!
//! A learner writes factual observations about a passage. Each line is
//! checked against a fixed taxonomy of interpretation-detection rules and
//! receives exactly one outcome with a point delta and feedback:
//! - [`rules`]: the immutable rule registry (hard, soft and bonus tiers)
//! - [`quotation`]: the quoted-wording exemption for soft triggers
//! - [`classify`]: the single-line decision procedure
//! - [`aggregate`]: multi-line submission scoring
//! - [`decoy`]: an independent check for verbs absent from the passage
//!
//! The engine is pure: build a [`RuleRegistry`] once, share it by reference,
//! and every call returns a fresh result with no side effects.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod decoy;
pub mod error;
pub mod exit_codes;
pub mod quotation;
pub mod rules;

pub use aggregate::{AggregateResult, classify_submission};
pub use classify::{ClassificationResult, OutcomeType, classify_line};
pub use config::Config;
pub use decoy::{DecoyMatch, ReferencePassage, check_decoy_verb};
pub use error::{ObsError, Result};
pub use rules::{RuleKind, RuleRegistry, Tier};
