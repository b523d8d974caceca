//! Decoy verb cross-checking.
//!
//! Flags observations that mention an action word which is plausible for a
//! passage but does not occur in it. This check has no tiers and awards no
//! points; callers decide how to surface a match.

mod passage;


pub use passage::ReferencePassage;

use serde::{Deserialize, Serialize};

/// A decoy verb found in an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoyMatch {
    /// Always `true` for a reported match; kept for callers that expect the flag.
    pub is_decoy: bool,
    /// The decoy verb as supplied by the caller (trimmed).
    pub verb: String,
}

impl DecoyMatch {
    fn new(verb: &str) -> Self {
        Self {
            is_decoy: true,
            verb: verb.to_string(),
        }
    }
}

/// Return the first decoy verb referenced by the observation.
///
/// Matching is case-insensitive substring containment. A decoy that
/// overlaps an actual verb (either contains the other) is never reported,
/// so shared stems like "run" / "running" do not raise false alarms. Blank
/// entries are ignored.
///
/// # Example
///
/// ```
/// use obsgrade::decoy::check_decoy_verb;
///
/// let hit = check_decoy_verb("He ran quickly", &["walked"], &["ran"]).unwrap();
/// assert!(hit.is_decoy);
/// assert_eq!(hit.verb, "ran");
/// ```
pub fn check_decoy_verb<A, D>(
    observation: &str,
    actual_verbs: &[A],
    decoy_verbs: &[D],
) -> Option<DecoyMatch>
where
    A: AsRef<str>,
    D: AsRef<str>,
{
    let observation = observation.to_lowercase();
    let actual: Vec<String> = actual_verbs
        .iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();

    for decoy in decoy_verbs {
        let verb = decoy.as_ref().trim();
        if verb.is_empty() {
            continue;
        }

        let needle = verb.to_lowercase();
        if !observation.contains(&needle) {
            continue;
        }

        let overlaps_actual = actual
            .iter()
            .any(|a| a.contains(&needle) || needle.contains(a.as_str()));
        if overlaps_actual {
            tracing::trace!(verb, "decoy overlaps an actual verb; ignored");
            continue;
        }

        tracing::debug!(verb, "decoy verb referenced");
        return Some(DecoyMatch::new(verb));
    }

    None
}
