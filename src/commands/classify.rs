//! The `classify` command.

use crate::cli::ClassifyArgs;
use obsgrade::classify::{ClassificationResult, classify_line};
use obsgrade::error::Result;
use obsgrade::rules::RuleRegistry;

use super::to_json;

pub fn cmd_classify(registry: &RuleRegistry, args: ClassifyArgs) -> Result<()> {
    let result = classify_line(registry, &args.text);
    print!("{}", render(&result, args.json)?);
    Ok(())
}

fn render(result: &ClassificationResult, json: bool) -> Result<String> {
    if json {
        return to_json(result);
    }

    let mut out = format!("{} {:+}", result.outcome_type, result.points);
    if let Some(rule) = result.matched_rule {
        out.push_str(&format!(" ({})", rule));
    }
    out.push('\n');
    if !result.feedback.is_empty() {
        out.push_str(&result.feedback);
        out.push('\n');
    }
    Ok(out)
}
