//! The `score` command.

use crate::cli::ScoreArgs;
use obsgrade::aggregate::{AggregateResult, classify_submission};
use obsgrade::decoy::{DecoyMatch, ReferencePassage};
use obsgrade::error::{ObsError, Result};
use obsgrade::rules::RuleRegistry;
use serde::Serialize;

use super::input::read_submission;
use super::to_json;

/// A decoy verb found on a given (1-based) line of the submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LineDecoy {
    line: usize,
    #[serde(flatten)]
    hit: DecoyMatch,
}

/// JSON shape: the aggregate fields, plus `decoys` when a passage was given.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport<'a> {
    #[serde(flatten)]
    result: &'a AggregateResult,
    #[serde(skip_serializing_if = "no_decoys")]
    decoys: &'a [LineDecoy],
}

fn no_decoys(decoys: &&[LineDecoy]) -> bool {
    decoys.is_empty()
}

pub fn cmd_score(registry: &RuleRegistry, args: ScoreArgs) -> Result<()> {
    let text = read_submission(args.file.as_deref())?;
    let passage = args.passage.as_deref().map(ReferencePassage::load).transpose()?;

    let result = classify_submission(registry, &text);
    let decoys = passage
        .as_ref()
        .map(|p| find_decoys(p, &text))
        .unwrap_or_default();

    print!("{}", render(&result, &decoys, args.json)?);

    if args.strict && result.has_penalties() {
        return Err(ObsError::ValidationError(format!(
            "{} of {} observations penalized",
            result.penalty_count,
            result.per_line.len()
        )));
    }

    Ok(())
}

/// Decoy hits per non-blank line, numbered as in the original text.
fn find_decoys(passage: &ReferencePassage, text: &str) -> Vec<LineDecoy> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            passage.check(line).map(|hit| LineDecoy {
                line: idx + 1,
                hit,
            })
        })
        .collect()
}

fn render(result: &AggregateResult, decoys: &[LineDecoy], json: bool) -> Result<String> {
    if json {
        return to_json(&ScoreReport { result, decoys });
    }

    let mut out = result.format_report();
    for decoy in decoys {
        out.push_str(&format!(
            "Warning: line {} mentions '{}', which does not occur in the passage\n",
            decoy.line, decoy.hit.verb
        ));
    }
    Ok(out)
}
