use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// notation: mismatched brackets, malformed numbers, slices no operator can
/// split, and malformed set-builder clauses.
pub mod parse_error;
/// Simplification errors.
///
/// Contains all error types that can be raised while simplifying a statement
/// against a workspace, such as division by zero, dimension mismatches or
/// wrong argument counts.
pub mod simplify_error;

pub use parse_error::ParseError;
pub use simplify_error::SimplifyError;

/// The broad class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text could not be parsed.
    Syntax,
    /// A numeric operation failed.
    Arithmetic,
    /// A value was structurally unusable.
    Argument,
}

/// Any error produced while evaluating text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Simplification failed.
    #[error(transparent)]
    Simplify(#[from] SimplifyError),
}

impl Error {
    /// The error class.
    ///
    /// # Example
    /// ```
    /// use mathnote::error::{Error, ErrorKind, SimplifyError};
    ///
    /// let error = Error::from(SimplifyError::LogarithmOfZero);
    /// assert_eq!(error.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(error) => error.kind(),
            Self::Simplify(error) => error.kind(),
        }
    }
}
