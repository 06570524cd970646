//! This library turns grammar definition files into the code that registers
//! each rule with a parser table.
//!
//! A grammar definition has one rule per line:
//! ```text
//! // Statements
//! Stmt: (Expr && SEMI)+  // statement
//! Value: Number || String
//! Expr: _IDENT
//! ```
//! - `a && b` is a conjunction, `a || b` a disjunction.
//! - A body starting with `_` is a token.
//! - A trailing `+`, `?` or `*` sets the repetition of the rule.
//!
//! It consists of
//! - __frontend__: [`parse_source`] / [`parse_file`] split every non-blank line into
//!   a [`SourceLine`](grammar::SourceLine). Lines that are not rule definitions are kept as comments.
//! - __backend__: [`RustGenerator`](backends::rust::RustGenerator) renders the lines into
//!   `result.insert(...)` calls.
//!
//! ## Getting Started
//! ```
//! let lines = rulegen::parse_source("Expr: _IDENT");
//! let code = rulegen::backends::rust::RustGenerator::new().generate(&lines).unwrap();
//! assert_eq!(code, "\t// Expr: _IDENT\n\tresult.insert(\"Expr\", create_label_match(vec![\"_IDENT\"]));\n");
//! ```
//! Or do everything at once with [`transpile_file`].

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod backends;
pub mod error;
pub mod grammar;
pub mod logging;

pub use parser::{parse_file, parse_line, parse_rule, parse_source};

use std::{io::Write, path::Path};

use crate::{backends::rust::RustGenerator, error::Error};

/// Read the grammar definition at `path` and write the generated code to `writer`.
///
/// Nothing is written if the grammar contains a rule that cannot be generated.
pub fn transpile_file<P: AsRef<Path>, W: Write>(path: P, writer: W) -> Result<(), Error> {
    let lines = parse_file(path.as_ref())?;
    RustGenerator::new().generate_to(&lines, writer)
}
