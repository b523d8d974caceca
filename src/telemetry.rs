//! Logging setup for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
//! Logs go to stderr so stdout stays clean for reports and JSON.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Logging could not be set up. The CLI reports this and carries on unlogged.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}'")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("could not install log subscriber: {0}")]
    Install(String),
}

/// Map the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        let directive = level_for_verbosity(verbose);
        EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
            directive: directive.to_string(),
            source,
        })
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
