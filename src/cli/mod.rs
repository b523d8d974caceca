//! CLI argument parsing for obsgrade.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// obsgrade: grade observations of a passage without interpretation.
///
/// Each line is checked against a fixed rule taxonomy:
/// - Hard triggers (meaning claims, doctrine, motives, ...) cost 10 points
/// - Soft triggers (emotional language) cost 5 unless quoted and cited
/// - Bonus patterns (quotes, agency, sequence, counts, ...) earn 10-20
#[derive(Parser, Debug)]
#[command(name = "obsgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (feedback overrides, extra patterns).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for obsgrade.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a single observation.
    Classify(ClassifyArgs),

    /// Score a multi-line submission from a file or stdin.
    ///
    /// Blank lines are skipped.
    Score(ScoreArgs),

    /// Check an observation for decoy verbs absent from the passage.
    Decoy(DecoyArgs),

    /// List the rule taxonomy in evaluation order.
    Rules,
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// The observation text.
    pub text: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `score` command.
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Submission file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with a validation failure if any line is penalized.
    #[arg(long)]
    pub strict: bool,

    /// Reference passage YAML; adds per-line decoy verb warnings.
    #[arg(long)]
    pub passage: Option<PathBuf>,
}

/// Arguments for the `decoy` command.
#[derive(Parser, Debug)]
pub struct DecoyArgs {
    /// The observation text.
    pub observation: String,

    /// Reference passage YAML with actual_verbs and decoy_verbs.
    #[arg(long, conflicts_with_all = ["actual", "decoy"])]
    pub passage: Option<PathBuf>,

    /// Verbs that occur in the passage.
    #[arg(long, value_delimiter = ',')]
    pub actual: Vec<String>,

    /// Plausible verbs absent from the passage.
    #[arg(long, value_delimiter = ',')]
    pub decoy: Vec<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_with_global_flags() {
        let cli = Cli::try_parse_from([
            "obsgrade",
            "-vv",
            "--config",
            "grading.yaml",
            "classify",
            "He felt sad.",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("grading.yaml")));
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.text, "He felt sad.");
                assert!(args.json);
            }
            other => panic!("Expected classify, got {:?}", other),
        }
    }

    #[test]
    fn parses_score_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["obsgrade", "score", "--strict"]).unwrap();
        match cli.command {
            Command::Score(args) => {
                assert!(args.file.is_none());
                assert!(args.strict);
                assert!(!args.json);
                assert!(args.passage.is_none());
            }
            other => panic!("Expected score, got {:?}", other),
        }
    }

    #[test]
    fn parses_decoy_verb_lists() {
        let cli = Cli::try_parse_from([
            "obsgrade",
            "decoy",
            "He ran quickly",
            "--actual",
            "walked,drew",
            "--decoy",
            "ran",
        ])
        .unwrap();
        match cli.command {
            Command::Decoy(args) => {
                assert_eq!(args.actual, vec!["walked", "drew"]);
                assert_eq!(args.decoy, vec!["ran"]);
            }
            other => panic!("Expected decoy, got {:?}", other),
        }
    }

    #[test]
    fn decoy_passage_conflicts_with_inline_lists() {
        let result = Cli::try_parse_from([
            "obsgrade",
            "decoy",
            "He ran",
            "--passage",
            "p.yaml",
            "--decoy",
            "ran",
        ]);
        assert!(result.is_err());
    }
}
