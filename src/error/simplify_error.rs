use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while simplifying a statement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimplifyError {
    /// Divided by a zero-magnitude constant.
    #[error("Division by zero in {operation}.")]
    DivisionByZero {
        /// The rendered operation.
        operation: String,
    },
    /// A result was not finite.
    #[error("Overflow in {operation}.")]
    Overflow {
        /// The rendered operation.
        operation: String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("{name} takes {expected} argument(s), but {found} were given.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments.
        found:    usize,
    },
    /// Combined quantities of different dimensions.
    #[error("Cannot {operation} {left} and {right}: the dimensions differ.")]
    IncompatibleDimensions {
        /// The attempted operation.
        operation: &'static str,
        /// The rendered left operand.
        left:      String,
        /// The rendered right operand.
        right:     String,
    },
    /// A function that needs a dimensionless argument received a dimensioned
    /// one.
    #[error("{function} cannot take the dimensioned value {value}.")]
    DimensionedArgument {
        /// The function or operator.
        function: String,
        /// The rendered argument.
        value:    String,
    },
    /// Took the logarithm of zero.
    #[error("The logarithm of zero is undefined.")]
    LogarithmOfZero,
    /// Function calls nested too deeply.
    #[error("Calling {name} exceeded the maximum call depth of {limit}.")]
    RecursionLimit {
        /// The function being called.
        name:  String,
        /// The depth limit.
        limit: usize,
    },
    /// A relation between non-numeric sides cannot be decided.
    #[error("Cannot decide whether {left} {relation} {right}.")]
    Undecidable {
        /// The rendered left side.
        left:     String,
        /// The relation glyph.
        relation: String,
        /// The rendered right side.
        right:    String,
    },
    /// A comparison was built with an inconsistent number of relations.
    #[error("{expressions} expression(s) cannot be chained by {relations} relation(s).")]
    InvalidComparison {
        /// The number of expressions.
        expressions: usize,
        /// The number of relations.
        relations:   usize,
    },
    /// Simplified an expression that failed to parse into anything
    /// meaningful.
    #[error("Malformed expression: {details}.")]
    Malformed {
        /// What was malformed.
        details: String,
    },
}

impl SimplifyError {
    /// The error class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidComparison { .. } | Self::Malformed { .. } => ErrorKind::Argument,
            _ => ErrorKind::Arithmetic,
        }
    }
}
