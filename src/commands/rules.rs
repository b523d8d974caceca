//! The `rules` command.

use obsgrade::error::Result;
use obsgrade::rules::RuleRegistry;

pub fn cmd_rules(registry: &RuleRegistry) -> Result<()> {
    print!("{}", render(registry));
    Ok(())
}

/// One row per rule in evaluation order, then the quotation keywords.
fn render(registry: &RuleRegistry) -> String {
    let mut out = String::new();

    for (idx, rule) in registry.rules().iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<5} {:>+4}  {:<26} {}\n",
            idx + 1,
            rule.tier().to_string(),
            rule.points(),
            rule.kind().name(),
            rule.feedback()
        ));

        let extra: Vec<&str> = rule.pattern_sources().skip(1).collect();
        if !extra.is_empty() {
            out.push_str(&format!("    extra patterns: {}\n", extra.join(", ")));
        }
    }

    out.push_str(&format!(
        "\nSoft triggers are skipped when a line quotes wording and cites it with: {}\n",
        registry.quotation().keywords().join(", ")
    ));

    out
}
