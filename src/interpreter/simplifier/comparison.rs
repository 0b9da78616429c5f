use std::cmp::Ordering;

use log::debug;

use crate::{
    ast::{Bound, Comparison, Expression, Locus, Relation, Statement},
    error::SimplifyError,
    interpreter::{
        simplifier::core::{SimplifyResult, simplified_all},
        value::constant::Constant,
        workspace::Workspace,
    },
};

impl Comparison {
    /// Simplifies a comparison.
    ///
    /// Three shapes store into the workspace and return the stored value:
    ///
    /// - `x = value` assigns the simplified value to `x`.
    /// - `f(x, y) = body` defines `f`, simplifying the body with `x` and `y`
    ///   kept symbolic.
    /// - `low < x < high`, or `high > x > low`, binds `x` to a range.
    ///
    /// Every other comparison is decided numerically and gives a truth value.
    ///
    /// # Errors
    /// - `Undecidable` when some link does not join two real constants, or two
    ///   constants for `=` and `≠`.
    /// - `IncompatibleDimensions` when a link joins constants of different
    ///   dimensions.
    pub(in crate::interpreter) fn simplified(&self,
                                             workspace: &mut Workspace)
                                             -> SimplifyResult<Statement> {
        match (self.expressions(), self.relations()) {
            ([target, value], [Relation::Equal]) => {
                if let Some(name) = target.as_variable() {
                    let value = value.simplified(workspace)?;
                    workspace.store_value(name, value.clone());
                    return Ok(value.into());
                }
                if let Some((name, parameters)) = target.as_storable() {
                    let local = workspace.localize_symbolic(&parameters)?;
                    let body = value.simplified(&local)?;
                    workspace.store_function(name, parameters, body.clone());
                    return Ok(body.into());
                }
            },
            ([low, Expression::Variable(name), high], [first, second])
                if first.is_ascending() && second.is_ascending() =>
            {
                return bind_range(workspace, name, low, high);
            },
            ([high, Expression::Variable(name), low], [first, second])
                if first.is_descending() && second.is_descending() =>
            {
                return bind_range(workspace, name, low, high);
            },
            _ => {},
        }

        let expressions = simplified_all(self.expressions(), workspace)?;
        let mut holds = true;
        for (pair, relation) in expressions.windows(2).zip(self.relations()) {
            holds &= decide(&pair[0], *relation, &pair[1])?;
        }
        Ok(Statement::TrueFalse(holds))
    }
}

/// Stores `low < name < high` and returns the range as a locus.
fn bind_range(workspace: &mut Workspace,
              name: &str,
              low: &Expression,
              high: &Expression)
              -> SimplifyResult<Statement> {
    let bound = Bound { name:  name.to_string(),
                        lower: low.simplified(workspace)?,
                        upper: high.simplified(workspace)?, };
    debug!("Binding {} < {name} < {}", bound.lower, bound.upper);

    let range = Expression::Locus(Locus { template: Box::new(Expression::Variable(name.to_string())),
                                          bounds:   vec![bound], });
    workspace.store_value(name, range.clone());
    Ok(range.into())
}

/// Decides one link of a chain between two simplified expressions.
fn decide(left: &Expression, relation: Relation, right: &Expression) -> SimplifyResult<bool> {
    let undecidable = || SimplifyError::Undecidable { left:     left.to_string(),
                                                      relation: relation.to_string(),
                                                      right:    right.to_string(), };

    let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) else {
        return Err(undecidable());
    };
    if !a.matches(b) {
        return Err(SimplifyError::IncompatibleDimensions { operation: "compare",
                                                           left:      a.to_string(),
                                                           right:     b.to_string(), });
    }

    match relation {
        Relation::Equal => Ok(a.approx_eq(b)),
        Relation::NotEqual => Ok(!a.approx_eq(b)),
        _ => {
            let ordering = order(a, b).ok_or_else(undecidable)?;
            Ok(match relation {
                   Relation::Less => ordering == Ordering::Less,
                   Relation::LessEqual => ordering != Ordering::Greater,
                   Relation::Greater => ordering == Ordering::Greater,
                   _ => ordering != Ordering::Less,
               })
        },
    }
}

/// Orders two real constants, treating tolerance-equal values as equal.
fn order(a: &Constant, b: &Constant) -> Option<Ordering> {
    if !a.is_real() || !b.is_real() {
        return None;
    }
    if a.approx_eq(b) {
        return Some(Ordering::Equal);
    }
    a.real.partial_cmp(&b.real)
}
