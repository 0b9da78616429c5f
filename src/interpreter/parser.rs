/// Core expression parsing.
///
/// Holds the rank table and the right-to-left precedence scan that splits a
/// token slice at its loosest operator, including implicit multiplication.
pub mod core;

/// Atom parsing.
///
/// Parses single bracketed groups: grouping parentheses, absolute values,
/// calls to built-in and user functions.
pub mod atom;

/// Set and set-builder parsing.
///
/// Parses the interior of braces into a plain set or a locus with its bound
/// clauses.
pub mod set;

/// Utility functions for the parser.
///
/// Provides the top-level unit scan shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Splits a statement on relations and builds expressions or comparisons.
pub mod statement;
