//! Line classification.
//!
//! Maps a single line of observation text to exactly one outcome: a hard
//! penalty, a soft warning, a bonus, or a default-valid result.

mod classifier;
mod types;


// Re-export public API
pub use classifier::classify_line;
pub use types::{ClassificationResult, OutcomeType};
