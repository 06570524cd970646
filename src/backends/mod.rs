//! Backends turn parsed grammar lines into code.

pub mod rust;
