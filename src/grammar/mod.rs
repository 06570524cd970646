//! The data model of a grammar definition file.
//!
//! Every non-blank line of a file becomes a [`SourceLine`]. Lines of the form
//! `label: body` additionally carry a [`RuleSpec`]:
//! ```
//! use rulegen::grammar::{RuleKind, Frequency};
//!
//! let lines = rulegen::parse_source("Stmt: (Expr && SEMI)+  // statement");
//! let (label, rule) = lines[0].definition().unwrap();
//! assert_eq!(label, "Stmt");
//! assert_eq!(rule.kind(), RuleKind::Conjunction);
//! assert_eq!(rule.frequency(), Frequency::OneOrMore);
//! assert_eq!(rule.operands(), ["Expr", "SEMI"]);
//! ```

mod line;
mod rule;

pub use line::*;
pub use rule::*;
