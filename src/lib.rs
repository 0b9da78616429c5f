//! # mathnote
//!
//! mathnote is an interpreter for handwritten mathematical notation written
//! in Rust. It parses text such as `x^2+3`, `f(x)=sin(x)` or `{x : 0<x<5}`
//! into statement trees and simplifies them against a workspace of
//! definitions, with complex numbers, physical dimensions and set-builder
//! syntax.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{ast::Statement, error::Error, interpreter::workspace::Workspace};

/// Defines the structure of parsed notation.
///
/// This module declares the `Statement` and `Expression` enums and the types
/// they are built from. The tree is built by the parser, simplified against a
/// workspace, and rendered back to text.
///
/// # Responsibilities
/// - Defines statement, expression, comparison and locus types.
/// - Provides shape, renaming and free-variable queries on expressions.
/// - Renders every tree deterministically, parenthesizing by precedence.
pub mod ast;
/// Provides unified error types for parsing and simplification.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or simplifying notation, together with the class each belongs to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Classifies errors as syntax, arithmetic or argument errors.
/// - Wraps both phases in a single crate-level `Error`.
pub mod error;
/// Orchestrates the interpretation of notation.
///
/// This module ties together the lexer, parser, simplifier, numeric kernel
/// and workspace.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and integers without silent data loss.
/// - Detect values within tolerance of an integer.
pub mod util;

pub use interpreter::parser::statement::parse_statement;

/// Parses and simplifies one statement against a workspace.
///
/// # Errors
/// Returns an error if parsing or simplification fails. The workspace is left
/// unchanged in that case.
///
/// # Examples
/// ```
/// use mathnote::{evaluate, interpreter::workspace::Workspace};
///
/// let mut workspace = Workspace::new();
/// evaluate("f(x)=x+1", &mut workspace).unwrap();
///
/// assert_eq!(evaluate("f(3)", &mut workspace).unwrap().to_string(), "4");
/// assert!(evaluate("f(1, 2)", &mut workspace).is_err());
/// ```
pub fn evaluate(text: &str, workspace: &mut Workspace) -> Result<Statement, Error> {
    let statement = parse_statement(text)?;
    debug!("Parsed {text:?} as {statement}");
    Ok(statement.simplified(workspace)?)
}

/// Evaluates every non-empty line of a source as one statement.
///
/// All statements share a session workspace seeded with the standard
/// constants. With `auto_print` every result is printed; otherwise only the
/// last one is.
///
/// # Errors
/// Returns the first error met; later lines are not evaluated.
///
/// # Examples
/// ```
/// use mathnote::run_session;
///
/// // Each line sees the definitions of the lines before it.
/// let results = run_session("x = 2\ny = x^3\ny - x", false).unwrap();
/// assert_eq!(results.last().unwrap().to_string(), "6");
///
/// // An unbalanced closer in a set-builder is an error.
/// assert!(run_session("{x : 0 < x < 1]", false).is_err());
/// ```
pub fn run_session(source: &str, auto_print: bool) -> Result<Vec<Statement>, Error> {
    let mut workspace = Workspace::standard();
    let mut results = Vec::new();

    for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let result = evaluate(line, &mut workspace)?;
        if auto_print {
            println!("{result}");
        }
        results.push(result);
    }

    if !auto_print && let Some(last) = results.last() {
        println!("{last}");
    }

    Ok(results)
}
