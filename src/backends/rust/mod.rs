//! Generate parser-table registration code in Rust.
//!
//! Use it like so:
//! ```
//! use rulegen::backends::rust::RustGenerator;
//!
//! let lines = rulegen::parse_source("Expr: _IDENT");
//! let code = RustGenerator::new().generate(&lines).unwrap();
//! assert!(code.contains("create_label_match(vec![\"_IDENT\"])"));
//! ```

mod formatter;
mod codegen;

pub use codegen::*;
