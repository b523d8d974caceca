//! The `decoy` command.

use crate::cli::DecoyArgs;
use obsgrade::decoy::{DecoyMatch, ReferencePassage};
use obsgrade::error::Result;

use super::to_json;

pub fn cmd_decoy(args: DecoyArgs) -> Result<()> {
    let passage = match args.passage.as_deref() {
        Some(path) => ReferencePassage::load(path)?,
        None => ReferencePassage::new(args.actual, args.decoy),
    };

    let hit = passage.check(&args.observation);
    print!("{}", render(hit.as_ref(), args.json)?);
    Ok(())
}

fn render(hit: Option<&DecoyMatch>, json: bool) -> Result<String> {
    if json {
        return to_json(&hit);
    }

    Ok(match hit {
        Some(hit) => format!(
            "Decoy verb '{}' is referenced but does not occur in the passage\n",
            hit.verb
        ),
        None => "No decoy verbs referenced\n".to_string(),
    })
}
