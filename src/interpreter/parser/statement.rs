use crate::{
    ast::{Comparison, Statement},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            core::{ParseResult, parse_expression},
            utils::split_top_level,
        },
    },
};

/// Parses a single statement from text.
///
/// The text is tokenized and split on relations outside of any bracket. A
/// statement without relations is a bare expression; otherwise each segment
/// is parsed as an expression and the whole becomes a [`Comparison`].
///
/// # Parameters
/// - `text`: The notation to parse.
///
/// # Returns
/// The parsed, unsimplified [`Statement`].
///
/// # Errors
/// Any [`crate::error::ParseError`] from tokenizing or parsing a segment.
///
/// # Example
/// ```
/// use mathnote::{ast::Statement, parse_statement};
///
/// let statement = parse_statement("0 < x ≤ 5").unwrap();
/// assert!(matches!(statement, Statement::Comparison(_)));
/// assert_eq!(statement.to_string(), "0 < x ≤ 5");
/// ```
pub fn parse_statement(text: &str) -> ParseResult<Statement> {
    let tokens = tokenize(text)?;
    let (segments, relations) = split_top_level(&tokens, |token| matches!(token, Token::Relation(_)));

    if relations.is_empty() {
        return Ok(Statement::Expression(parse_expression(&tokens)?));
    }

    let expressions = segments.into_iter()
                              .map(parse_expression)
                              .collect::<ParseResult<Vec<_>>>()?;
    let relations = relations.into_iter()
                             .filter_map(|token| match token {
                                 Token::Relation(relation) => Some(*relation),
                                 _ => None,
                             })
                             .collect();
    Ok(Statement::Comparison(Comparison::chain(expressions, relations)))
}
