//! Errors that abort a transpilation run.
//!
//! Malformed rule lines are not errors. They are passed through as comments.

use std::path::PathBuf;
use thiserror::Error;

use crate::grammar::Frequency;

/// The grammar definition file could not be loaded.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// A rule is well-formed but cannot be expressed in the parser table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Tokens are atomic and must not carry a repetition marker
    #[error("Unexpected frequency {frequency} for token rule '{label}' on line {line}")]
    UnsupportedFrequency {
        /// Label of the offending rule
        label: String,
        /// 1-based line number in the grammar file
        line: usize,
        /// The frequency that was requested
        frequency: Frequency,
    },
}

/// Everything that can go wrong in [`transpile_file`](crate::transpile_file).
#[derive(Debug, Error)]
pub enum Error {
    /// Loading the grammar failed
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// Generating code failed
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Writing the generated code failed
    #[error("Could not write generated code: {0}")]
    Io(#[from] std::io::Error),
}
