//! Quotation exception detection.
//!
//! A line is exempt from soft-trigger evaluation when it both quotes some
//! wording and cites it with a contextual keyword ("the phrase ...",
//! "... appears"). Hard triggers never consult this detector.

use crate::error::{ObsError, Result};
use regex::{Regex, RegexBuilder};

/// Quoted span: a matched pair of straight or curly quotes on one line.
///
/// A single-quote pair only counts when it is not glued to word characters,
/// so possessives and contractions ("God's", "don't") never open a span.
/// Inside a span, an apostrophe between two word characters is part of the
/// quoted wording.
const QUOTED_SPAN: &str = r#""[^"\n]+"|“[^”\n]+”|‘[^’\n]+’|(?:^|[^\w'])'(?:[^'\n]|\b'\b)+'(?:[^\w']|$)"#;

/// Default citation keywords. Plural forms are accepted automatically.
pub const DEFAULT_CITATION_KEYWORDS: [&str; 10] = [
    "phrase",
    "word",
    "text",
    "verse",
    "says",
    "states",
    "reads",
    "appears",
    "mentioned",
    "written",
];

/// Decides whether a line is exempt from soft-trigger penalties.
pub struct QuotationDetector {
    quoted: Regex,
    citation: Regex,
    keywords: Vec<String>,
}

impl std::fmt::Debug for QuotationDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotationDetector")
            .field("keywords", &self.keywords)
            .finish()
    }
}

impl QuotationDetector {
    /// Build a detector for the given citation keywords.
    ///
    /// Keywords are matched case-insensitively on word boundaries; each may be
    /// followed by a plural `s`. An empty keyword list is a configuration
    /// error, since it would make the exemption impossible to trigger.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(ObsError::ConfigError(
                "citation_keywords must contain at least one non-empty keyword".to_string(),
            ));
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        let citation = RegexBuilder::new(&format!(r"\b(?:{})s?\b", alternation))
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                ObsError::ConfigError(format!("invalid citation_keywords: {}", e))
            })?;

        let quoted = Regex::new(QUOTED_SPAN)
            .map_err(|e| ObsError::ConfigError(format!("invalid quoted-span pattern: {}", e)))?;

        Ok(Self {
            quoted,
            citation,
            keywords,
        })
    }

    /// The normalized keyword list this detector was built from.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether the line contains at least one complete quoted span.
    pub fn has_quoted_span(&self, line: &str) -> bool {
        self.quoted.is_match(line)
    }

    /// Whether the line contains at least one citation keyword.
    pub fn has_citation_keyword(&self, line: &str) -> bool {
        self.citation.is_match(line)
    }

    /// Whether soft-trigger evaluation should be skipped for this line.
    pub fn is_exempt(&self, line: &str) -> bool {
        self.has_quoted_span(line) && self.has_citation_keyword(line)
    }
}
