//! Syntax checker for a small imperative language:
//! assignments, a print statement, pointer and array designators, and arithmetic expressions.
//!
//! The checker only answers "is this program well-formed?",
//! and if not, where the first problem is.
//! It builds no syntax tree and evaluates nothing.

pub mod reader;

pub use reader::{check, check_with, parse_program, tokenize, CheckResult, SyntaxError};

#[cfg(feature = "cli")]
pub mod cli;
