use crate::{
    ast::{Expression, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Bracket, Token, render},
        parser::{
            core::{ParseResult, parse_expression},
            set::parse_set,
        },
        simplifier::builtin::BuiltInFunction,
    },
};

/// Parses a single bracketed group, from its opener to its closer.
///
/// A named group is a call: `ln` and `sqrt` become operations, registered
/// built-ins become [`Expression::BuiltIn`], and any other name a user
/// function call. Unnamed groups depend on the bracket:
///
/// - `{ }` is a set or set-builder.
/// - `| |` is the absolute value.
/// - `( )` and `[ ]` group; a vector inside becomes parenthetic.
///
/// # Parameters
/// - `tokens`: The group, including both brackets.
///
/// # Returns
/// The parsed atom.
pub(in crate::interpreter::parser) fn parse_group(tokens: &[Token]) -> ParseResult<Expression> {
    let (first, interior) = match tokens {
        [first, interior @ .., Token::Close(_)] => (first, interior),
        _ => return Err(ParseError::NoOperator { tokens: render(tokens) }),
    };
    let Token::Open { bracket, head } = first else {
        return Err(ParseError::NoOperator { tokens: render(tokens) });
    };

    if let Some(head) = head {
        return parse_call(head, interior);
    }

    match bracket {
        Bracket::Curly => parse_set(interior),
        Bracket::Bar => Ok(Expression::unary(Operator::Absolute, parse_expression(interior)?)),
        Bracket::Round | Bracket::Square => Ok(match parse_expression(interior)? {
                                                   Expression::Vector { components,
                                                                        parenthetic: false, } => {
                                                       Expression::Vector { components,
                                                                            parenthetic: true }
                                                   },
                                                   inner => {
                                                       Expression::unary(Operator::Parentheses,
                                                                         inner)
                                                   },
                                               }),
    }
}

fn parse_call(head: &str, interior: &[Token]) -> ParseResult<Expression> {
    let argument = parse_expression(interior)?;

    if head == "ln" {
        return Ok(Expression::unary(Operator::Ln, argument));
    }
    if head == "sqrt" {
        return Ok(Expression::sqrt(argument));
    }
    if let Some(function) = BuiltInFunction::from_name(head) {
        return Ok(Expression::BuiltIn { function,
                                        argument: Box::new(argument) });
    }

    let arguments = match argument {
        Expression::Operation { operator: Operator::Null,
                                .. } => Vec::new(),
        Expression::Vector { components, .. } => components,
        other => vec![other],
    };
    Ok(Expression::Function { name: head.to_string(),
                              arguments })
}
