//! Command implementations for obsgrade.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Rendering is kept in pure functions so it can be tested
//! without capturing stdout.

mod classify;
mod decoy;
mod input;
mod rules;
mod score;

use crate::cli::{Cli, Command};
use obsgrade::config::Config;
use obsgrade::error::{ObsError, Result};
use obsgrade::rules::RuleRegistry;
use serde::Serialize;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// The rule registry is built once here, from `--config` when given, and
/// shared by reference with the command that needs it. Every command
/// rejects an invalid config, including those that do not grade lines.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify(args) => {
            let registry = load_registry(cli.config.as_deref())?;
            classify::cmd_classify(&registry, args)
        }
        Command::Score(args) => {
            let registry = load_registry(cli.config.as_deref())?;
            score::cmd_score(&registry, args)
        }
        Command::Decoy(args) => {
            // Decoy checks use no rules, but a broken --config is still an error.
            load_registry(cli.config.as_deref())?;
            decoy::cmd_decoy(args)
        }
        Command::Rules => {
            let registry = load_registry(cli.config.as_deref())?;
            rules::cmd_rules(&registry)
        }
    }
}

/// Build the registry from a config file, or the built-in taxonomy.
fn load_registry(config_path: Option<&Path>) -> Result<RuleRegistry> {
    let config = match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    RuleRegistry::from_config(&config)
}

/// Pretty JSON with a trailing newline.
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| ObsError::UserError(format!("failed to serialize output: {}", e)))
}
