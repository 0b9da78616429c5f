use log::debug;

use crate::{
    ast::{Bound, Expression, Locus},
    error::ParseError,
    interpreter::{
        lexer::{Symbol, Token, render},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{single, split_top_level, units},
        },
    },
};

/// Parses the interior of a pair of braces.
///
/// A single `:`, or an odd number of bars (split at the last one), separates
/// a set-builder template from its clauses. Without a separator the interior
/// is a plain set of its comma-separated members.
///
/// Grammar: `set := members | template (":" | "|") clause ("," clause)*`
/// where `clause := expression ("<" | "≤") name ("<" | "≤") expression`.
///
/// # Errors
/// - `TooManyColons` for a second colon.
/// - `InvalidCondition` and `InvalidBoundName` for malformed clauses.
pub(in crate::interpreter::parser) fn parse_set(interior: &[Token]) -> ParseResult<Expression> {
    if interior.is_empty() {
        return Ok(Expression::Set(Vec::new()));
    }

    let units = units(interior);
    let colons = units.iter()
                      .filter(|unit| single(interior, unit) == Some(&Token::Operator(Symbol::Colon)))
                      .collect::<Vec<_>>();
    let bars = units.iter()
                    .filter(|unit| single(interior, unit) == Some(&Token::Bar))
                    .collect::<Vec<_>>();

    let separator = match (colons.as_slice(), bars.last()) {
        ([colon], _) => Some(*colon),
        ([], Some(bar)) if bars.len() % 2 == 1 => Some(*bar),
        ([], _) => None,
        (_, _) => return Err(ParseError::TooManyColons { count: colons.len() }),
    };

    let Some(separator) = separator else {
        return Ok(Expression::Set(parse_expression(interior)?.into_components()));
    };

    let template = parse_expression(&interior[..separator.start])?;
    let (clauses, _) = split_top_level(&interior[separator.end..],
                                       |token| *token == Token::Operator(Symbol::Comma));
    let bounds = clauses.into_iter().map(parse_clause).collect::<ParseResult<Vec<_>>>()?;

    debug!("Parsed set-builder over {}",
           bounds.iter().map(|b| b.name.as_str()).collect::<Vec<_>>().join(", "));
    Ok(Expression::Locus(Locus { template: Box::new(template),
                                 bounds }))
}

/// Parses `low < name < high`.
fn parse_clause(clause: &[Token]) -> ParseResult<Bound> {
    let (parts, relations) = split_top_level(clause, |token| matches!(token, Token::Relation(_)));

    let ascending = relations.len() == 2
                    && relations.iter()
                                .all(|token| matches!(token, Token::Relation(r) if r.is_ascending()));
    if !ascending {
        return Err(ParseError::InvalidCondition { clause: render(clause) });
    }

    let name = match parts[1] {
        [Token::Identifier(name)] => name.clone(),
        middle => return Err(ParseError::InvalidBoundName { name: render(middle) }),
    };

    Ok(Bound { name,
               lower: parse_expression(parts[0])?,
               upper: parse_expression(parts[2])? })
}
