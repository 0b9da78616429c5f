use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A closing bracket does not match the innermost open one.
    #[error("Mismatched brackets: expected '{expected}' but found '{found}'.")]
    MismatchedBrackets {
        /// The closer the innermost open bracket needs.
        expected: char,
        /// The closer that was found instead.
        found:    char,
    },
    /// A run of digits and decimal points is not a number.
    #[error("Invalid number: {text}.")]
    InvalidNumber {
        /// The offending run.
        text: String,
    },
    /// A character could not be tokenized.
    #[error("Unexpected character: {text}.")]
    UnexpectedCharacter {
        /// The offending text.
        text: String,
    },
    /// No operator splits the slice and it is not a single group.
    #[error("No operator joins {tokens}.")]
    NoOperator {
        /// The rendered token slice.
        tokens: String,
    },
    /// A set-builder uses more than one colon.
    #[error("Too many colons in set-builder: found {count}.")]
    TooManyColons {
        /// The number of colons at brace depth.
        count: usize,
    },
    /// A set-builder clause is not of the form `low < name < high`.
    #[error("Invalid set-builder condition: {clause}.")]
    InvalidCondition {
        /// The rendered clause.
        clause: String,
    },
    /// The bounded term of a set-builder clause is not a plain name.
    #[error("Invalid bound name: {name}.")]
    InvalidBoundName {
        /// The rendered middle of the clause.
        name: String,
    },
}

impl ParseError {
    /// All parse errors are syntax errors.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Syntax
    }
}
