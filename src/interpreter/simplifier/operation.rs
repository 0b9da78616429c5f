use log::trace;

use crate::{
    ast::{Expression, Operator},
    error::SimplifyError,
    interpreter::{
        simplifier::core::{SimplifyResult, simplified_all},
        value::constant::{Constant, ONE, ZERO},
        workspace::Workspace,
    },
};

impl Expression {
    /// Simplifies an operation: operands first, then the operator's rule.
    pub(in crate::interpreter::simplifier) fn simplified_operation(operator: Operator,
                                                                   operands: &[Self],
                                                                   workspace: &Workspace)
                                                                   -> SimplifyResult<Self> {
        if operator == Operator::Error {
            return Err(SimplifyError::Malformed { details: "an operator is missing its operands"
                                                               .to_string(), });
        }

        let operands = simplified_all(operands, workspace)?;
        trace!("Applying {operator:?} to {} operand(s)", operands.len());

        match (operator, operands.as_slice()) {
            (Operator::Parentheses, [inner]) => Ok(inner.clone()),
            (Operator::Add, [a, b]) => add(a, b),
            (Operator::Subtract, [a, b]) => subtract(a, b),
            (Operator::Negate, [a]) => Ok(negate(a)),
            (Operator::Multiply, [a, b]) => multiply(a, b),
            (Operator::Divide, [a, b]) => divide(a, b),
            (Operator::Modulo, [Self::Constant(a), Self::Constant(b)]) => {
                Ok(Self::Constant(a.modulo(b)?))
            },
            (Operator::Power, [a, b]) => power(a, b),
            (Operator::Cross, [a, b]) => cross(a, b),
            (Operator::Absolute, [a]) => absolute(a),
            (Operator::Ln, [a]) => ln(a),
            (Operator::Root, [Self::Constant(a), Self::Constant(b)]) => {
                Ok(Self::Constant(a.root(b)?))
            },
            _ => Ok(Self::operation(operator, operands)),
        }
    }
}

/// `a + b` for simplified operands.
fn add(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    match (a, b) {
        (Expression::Constant(x), Expression::Constant(y)) => {
            finite(x.plus(y)?, || format!("{x} + {y}"))
        },
        (Expression::Constant(zero), other) | (other, Expression::Constant(zero))
            if zero.is_zero() =>
        {
            Ok(other.clone())
        },
        _ => Ok(component_wise(a, b, add)?.unwrap_or_else(|| {
                                              Expression::binary(Operator::Add, a.clone(), b.clone())
                                          })),
    }
}

/// `a - b` for simplified operands.
fn subtract(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    match (a, b) {
        (Expression::Constant(x), Expression::Constant(y)) => {
            finite(x.plus(&y.negative())?, || format!("{x} - {y}"))
        },
        (other, Expression::Constant(zero)) if zero.is_zero() => Ok(other.clone()),
        (Expression::Constant(zero), other) if zero.is_zero() => Ok(negate(other)),
        _ => Ok(component_wise(a, b, subtract)?.unwrap_or_else(|| {
                                                   Expression::binary(Operator::Subtract,
                                                                      a.clone(),
                                                                      b.clone())
                                               })),
    }
}

/// `-a` for a simplified operand.
fn negate(a: &Expression) -> Expression {
    match a {
        Expression::Constant(x) => Expression::Constant(x.negative()),
        Expression::Operation { operator: Operator::Negate,
                                operands, } if operands.len() == 1 => operands[0].clone(),
        Expression::Vector { components,
                             parenthetic, } => {
            Expression::Vector { components:  components.iter().map(negate).collect(),
                                 parenthetic: *parenthetic, }
        },
        _ => Expression::unary(Operator::Negate, a.clone()),
    }
}

/// `a * b` for simplified operands.
fn multiply(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    match (a, b) {
        (Expression::Constant(x), Expression::Constant(y)) => {
            finite(x.times(y), || format!("{x}*{y}"))
        },
        (Expression::Constant(one), other) | (other, Expression::Constant(one)) if one.is_one() => {
            Ok(other.clone())
        },
        (Expression::Constant(_),
         Expression::Vector { components,
                              parenthetic, }) => {
            Ok(Expression::Vector { components:  components.iter()
                                                           .map(|c| multiply(a, c))
                                                           .collect::<SimplifyResult<_>>()?,
                                    parenthetic: *parenthetic, })
        },
        (Expression::Vector { components,
                              parenthetic, },
         Expression::Constant(_)) => {
            Ok(Expression::Vector { components:  components.iter()
                                                           .map(|c| multiply(c, b))
                                                           .collect::<SimplifyResult<_>>()?,
                                    parenthetic: *parenthetic, })
        },
        (Expression::Constant(zero), _) | (_, Expression::Constant(zero))
            if zero.is_zero() && zero.is_dimensionless() =>
        {
            Ok(Expression::Constant(ZERO))
        },
        _ => Ok(Expression::binary(Operator::Multiply, a.clone(), b.clone())),
    }
}

/// `a / b` for simplified operands.
fn divide(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    match (a, b) {
        (Expression::Constant(x), Expression::Constant(y)) => {
            finite(x.divided_by(y)?, || format!("{x}/{y}"))
        },
        (other, Expression::Constant(one)) if one.is_one() => Ok(other.clone()),
        (Expression::Vector { components,
                              parenthetic, },
         Expression::Constant(_)) => {
            Ok(Expression::Vector { components:  components.iter()
                                                           .map(|c| divide(c, b))
                                                           .collect::<SimplifyResult<_>>()?,
                                    parenthetic: *parenthetic, })
        },
        _ => Ok(Expression::binary(Operator::Divide, a.clone(), b.clone())),
    }
}

/// `a ^ b` for simplified operands.
fn power(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    match (a, b) {
        (Expression::Constant(x), Expression::Constant(y)) => Ok(Expression::Constant(x.pow(y)?)),
        (other, Expression::Constant(one)) if one.is_one() => Ok(other.clone()),
        (_, Expression::Constant(zero)) if zero.is_zero() && zero.is_dimensionless() => {
            Ok(Expression::Constant(ONE))
        },
        _ => Ok(Expression::binary(Operator::Power, a.clone(), b.clone())),
    }
}

/// The cross product of two 3-vectors; anything else stays symbolic.
fn cross(a: &Expression, b: &Expression) -> SimplifyResult<Expression> {
    if let (Expression::Vector { components: u, .. }, Expression::Vector { components: v, .. }) =
        (a, b)
       && let ([u1, u2, u3], [v1, v2, v3]) = (u.as_slice(), v.as_slice())
    {
        let components = vec![subtract(&multiply(u2, v3)?, &multiply(u3, v2)?)?,
                              subtract(&multiply(u3, v1)?, &multiply(u1, v3)?)?,
                              subtract(&multiply(u1, v2)?, &multiply(u2, v1)?)?];
        return Ok(Expression::Vector { components,
                                       parenthetic: true });
    }
    Ok(Expression::binary(Operator::Cross, a.clone(), b.clone()))
}

/// `|a|`: the magnitude of a constant or the Euclidean norm of a vector of
/// constants.
fn absolute(a: &Expression) -> SimplifyResult<Expression> {
    match a {
        Expression::Constant(x) => Ok(Expression::Constant(x.abs())),
        Expression::Vector { components, .. } if !components.is_empty() => {
            let Some(constants) = components.iter()
                                            .map(Expression::as_constant)
                                            .collect::<Option<Vec<&Constant>>>()
            else {
                return Ok(Expression::unary(Operator::Absolute, a.clone()));
            };
            let mut squares = constants.iter().map(|c| {
                                                  let magnitude = c.abs();
                                                  magnitude.times(&magnitude)
                                              });
            let first = squares.next().unwrap_or(ZERO);
            let sum = squares.try_fold(first, |sum, square| sum.plus(&square))?;
            Ok(Expression::Constant(sum.sqrt()?))
        },
        _ => Ok(Expression::unary(Operator::Absolute, a.clone())),
    }
}

/// `ln(a)` for a simplified operand.
fn ln(a: &Expression) -> SimplifyResult<Expression> {
    match a {
        Expression::Constant(x) if x.is_zero() => Err(SimplifyError::LogarithmOfZero),
        Expression::Constant(x) if !x.is_dimensionless() => {
            Err(SimplifyError::DimensionedArgument { function: "ln".to_string(),
                                                     value:    x.to_string(), })
        },
        Expression::Constant(x) => Ok(Expression::Constant(x.ln())),
        _ => Ok(Expression::unary(Operator::Ln, a.clone())),
    }
}

/// Wraps a computed constant, failing with `Overflow` when it left the finite
/// range.
fn finite<F>(value: Constant, operation: F) -> SimplifyResult<Expression>
    where F: FnOnce() -> String
{
    if value.is_finite() {
        Ok(Expression::Constant(value))
    } else {
        Err(SimplifyError::Overflow { operation: operation() })
    }
}

/// Applies `operation` pairwise to two vectors of the same length, or returns
/// `None` when the operands are not such vectors.
fn component_wise<F>(a: &Expression,
                     b: &Expression,
                     operation: F)
                     -> SimplifyResult<Option<Expression>>
    where F: Fn(&Expression, &Expression) -> SimplifyResult<Expression>
{
    match (a, b) {
        (Expression::Vector { components: u,
                              parenthetic, },
         Expression::Vector { components: v, .. }) if u.len() == v.len() => {
            let components = u.iter()
                              .zip(v)
                              .map(|(x, y)| operation(x, y))
                              .collect::<SimplifyResult<Vec<_>>>()?;
            Ok(Some(Expression::Vector { components,
                                         parenthetic: *parenthetic }))
        },
        _ => Ok(None),
    }
}
