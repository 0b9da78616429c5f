use std::ops::Range;

use log::trace;

use crate::{
    ast::{Expression, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Symbol, Token, render},
        parser::{
            atom::parse_group,
            utils::{is_operand, single, units},
        },
        value::constant::Constant,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How an infix symbol builds its expression.
#[derive(Clone, Copy)]
enum Infix {
    /// Joins both sides into a vector.
    Concat,
    /// Applies the operator to `(left, right)`.
    Apply(Operator),
    /// Applies the operator to `(right, left)`.
    Reversed(Operator),
}

const ADDITIVE: usize = 1;
const MULTIPLICATIVE: usize = 2;

/// Infix symbols by rank, loosest first. Within a rank the rightmost symbol
/// splits, which makes every rank left-associative.
const RANKS: [&[(Symbol, Infix)]; 4] = [&[(Symbol::Comma, Infix::Concat)],
                                        &[(Symbol::Plus, Infix::Apply(Operator::Add)),
                                          (Symbol::Minus, Infix::Apply(Operator::Subtract))],
                                        &[(Symbol::Star, Infix::Apply(Operator::Multiply)),
                                          (Symbol::Cross, Infix::Apply(Operator::Cross)),
                                          (Symbol::Slash, Infix::Apply(Operator::Divide)),
                                          (Symbol::Backslash, Infix::Reversed(Operator::Divide)),
                                          (Symbol::Percent, Infix::Apply(Operator::Modulo))],
                                        &[(Symbol::Caret, Infix::Apply(Operator::Power))]];

/// Where a slice splits into two operands.
struct Split {
    infix: Infix,
    left:  Range<usize>,
    right: Range<usize>,
}

/// Parses a balanced token slice into an expression.
///
/// Each rank is scanned right to left over the top-level units, skipping
/// bracketed groups. The first rank with a match splits the slice. A slice no
/// rank splits must be a single group, which is parsed as an atom.
///
/// # Parameters
/// - `tokens`: The slice to parse.
///
/// # Returns
/// The parsed expression. An empty slice is the `Null` operation and a lone
/// operator is the `Error` operation.
///
/// # Errors
/// `NoOperator` when nothing joins the units of the slice, plus whatever the
/// nested groups report.
pub fn parse_expression(tokens: &[Token]) -> ParseResult<Expression> {
    match tokens {
        [] => return Ok(Expression::null()),
        [Token::Number(n)] => return Ok(Expression::Constant(Constant::real(*n))),
        [Token::Identifier(name)] => return Ok(Expression::Variable(name.clone())),
        [token] if token.is_operator() => return Ok(Expression::error()),
        _ => {},
    }

    let units = units(tokens);

    for rank in 0..RANKS.len() {
        if let Some(split) = find_split(tokens, &units, rank) {
            trace!("Splitting {} at rank {rank}", render(tokens));
            let left = parse_expression(&tokens[split.left])?;
            let right = parse_expression(&tokens[split.right])?;
            return Ok(match split.infix {
                          Infix::Concat => Expression::concat(left, right),
                          Infix::Apply(operator) => Expression::binary(operator, left, right),
                          Infix::Reversed(operator) => Expression::binary(operator, right, left),
                      });
        }
        if rank == ADDITIVE && matches!(tokens.first(), Some(Token::Operator(Symbol::Minus))) {
            return Ok(Expression::unary(Operator::Negate, parse_expression(&tokens[1..])?));
        }
    }

    if let [unit] = units.as_slice()
       && unit.len() > 1
    {
        return parse_group(tokens);
    }

    Err(ParseError::NoOperator { tokens: render(tokens) })
}

/// Finds the rightmost split of a rank.
fn find_split(tokens: &[Token], units: &[Range<usize>], rank: usize) -> Option<Split> {
    for k in (0..units.len()).rev() {
        let unit = &units[k];

        if let Some(Token::Operator(symbol)) = single(tokens, unit)
           && let Some((_, infix)) = RANKS[rank].iter().find(|(s, _)| s == symbol)
        {
            // A minus at the start or after another operator is a negation.
            let negation = *symbol == Symbol::Minus
                           && (k == 0 || !is_operand(tokens, &units[k - 1]));
            if !negation {
                return Some(Split { infix: *infix,
                                    left:  0..unit.start,
                                    right: unit.end..tokens.len(), });
            }
        }

        if rank == MULTIPLICATIVE
           && k > 0
           && is_operand(tokens, unit)
           && is_operand(tokens, &units[k - 1])
        {
            return Some(Split { infix: Infix::Apply(Operator::Multiply),
                                left:  0..unit.start,
                                right: unit.start..tokens.len(), });
        }
    }
    None
}
