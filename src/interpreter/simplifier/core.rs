use log::trace;

use crate::{
    ast::{Expression, Statement},
    error::SimplifyError,
    interpreter::workspace::Workspace,
};

/// Result type used by the simplifier and the numeric kernel.
///
/// All simplification functions return either a value of type `T` or a
/// `SimplifyError` describing the failure.
pub type SimplifyResult<T> = Result<T, SimplifyError>;

impl Statement {
    /// Simplifies the statement into its normal form.
    ///
    /// Comparisons may store into the workspace: assignments, function
    /// definitions and range bindings. A store happens only once the stored
    /// value has simplified, so a failing statement leaves the workspace as it
    /// was.
    ///
    /// # Parameters
    /// - `workspace`: The session's bindings.
    ///
    /// # Returns
    /// A number, a symbolic expression, or a truth value.
    ///
    /// # Example
    /// ```
    /// use mathnote::{interpreter::workspace::Workspace, parse_statement};
    ///
    /// let mut workspace = Workspace::new();
    /// parse_statement("x=5").unwrap().simplified(&mut workspace).unwrap();
    ///
    /// let result = parse_statement("x+1").unwrap().simplified(&mut workspace).unwrap();
    /// assert_eq!(result.to_string(), "6");
    /// ```
    pub fn simplified(&self, workspace: &mut Workspace) -> SimplifyResult<Self> {
        match self {
            Self::Expression(expression) => Ok(Self::Expression(expression.simplified(workspace)?)),
            Self::Comparison(comparison) => comparison.simplified(workspace),
            Self::TrueFalse(value) => Ok(Self::TrueFalse(*value)),
        }
    }
}

impl Expression {
    /// Simplifies the expression against a workspace.
    ///
    /// Expressions never store, so the workspace is only read. Constants are
    /// terminal. Variables resolve to their stored value simplified against
    /// the current bindings, or stay symbolic when unbound. Operations
    /// simplify their operands first and then apply the arithmetic and
    /// identity rules of their operator.
    ///
    /// # Errors
    /// Any arithmetic failure met on the way, such as a division by zero.
    pub fn simplified(&self, workspace: &Workspace) -> SimplifyResult<Self> {
        match self {
            Self::Constant(_) => Ok(self.clone()),
            Self::Variable(name) => Self::resolved(name, workspace),
            Self::Operation { operator, operands } => {
                Self::simplified_operation(*operator, operands, workspace)
            },
            Self::Function { name, arguments } => {
                Self::simplified_call(name, arguments, workspace)
            },
            Self::BuiltIn { function, argument } => {
                let argument = argument.simplified(workspace)?;
                match argument.as_constant() {
                    Some(constant) => Ok(Self::Constant(function.apply(constant)?)),
                    None => Ok(Self::BuiltIn { function: *function,
                                               argument: Box::new(argument), }),
                }
            },
            Self::Vector { components,
                           parenthetic, } => {
                Ok(Self::Vector { components:  simplified_all(components, workspace)?,
                                  parenthetic: *parenthetic, })
            },
            Self::Set(members) => {
                let mut distinct: Vec<Self> = Vec::with_capacity(members.len());
                for member in simplified_all(members, workspace)? {
                    if !distinct.iter().any(|m| m.same_member(&member)) {
                        distinct.push(member);
                    }
                }
                Ok(Self::Set(distinct))
            },
            Self::Locus(locus) => Self::simplified_locus(locus, workspace),
        }
    }

    /// Resolves a variable. Unbound names and function names stay symbolic.
    /// A session value is simplified in a child where the name is bound to
    /// itself, so bindings made after the store are seen and a value that
    /// mentions its own name terminates.
    fn resolved(name: &str, workspace: &Workspace) -> SimplifyResult<Self> {
        let Some(binding) = workspace.get(name).filter(|b| b.is_value()) else {
            return Ok(Self::Variable(name.to_string()));
        };
        if binding.settled || binding.body.as_constant().is_some() {
            return Ok(binding.body.clone());
        }

        trace!("Resolving {name} = {}", binding.body);
        let local = workspace.localize_symbolic(&[name.to_string()])?;
        binding.body.simplified(&local)
    }

    /// Whether two simplified set members count as one: constants within
    /// tolerance of each other, anything else when structurally equal.
    fn same_member(&self, other: &Self) -> bool {
        match (self.as_constant(), other.as_constant()) {
            (Some(a), Some(b)) => a.approx_eq(b),
            _ => self == other,
        }
    }
}

/// Simplifies every expression of a slice.
pub(in crate::interpreter::simplifier) fn simplified_all(expressions: &[Expression],
                                                         workspace: &Workspace)
                                                         -> SimplifyResult<Vec<Expression>> {
    expressions.iter().map(|e| e.simplified(workspace)).collect()
}
