//! Logging setup for the binaries, built on `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that stdout carries nothing but generated code.
//!
//! - `warn`: malformed lines that are passed through, mixed repetition markers
//! - `info`: summary counts
//! - `debug`: every parsed rule
//!
//! `RUST_LOG` takes precedence over the verbosity given on the command line.

use tracing::Level;
use tracing_subscriber::{filter::ParseError, fmt, EnvFilter};

/// Map the number of `-v` flags to a log level.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter(verbosity: u8, directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(level_from_verbosity(verbosity).as_str().to_lowercase()),
    }
}

/// Install the global subscriber. Calling this twice is a no-op.
pub fn init(verbosity: u8) -> Result<(), ParseError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter(verbosity, directives.as_deref())?;
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
