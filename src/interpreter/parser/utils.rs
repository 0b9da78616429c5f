use std::ops::Range;

use crate::interpreter::lexer::Token;

/// Splits a token slice into top-level units.
///
/// A bracketed group, from its opener through the matching closer, is one
/// unit. Every other token is a unit on its own. Because tokens are balanced
/// before parsing, an unclosed group can only reach the end of the slice.
///
/// # Parameters
/// - `tokens`: The slice to scan.
///
/// # Returns
/// The index range of every unit, left to right.
pub(in crate::interpreter::parser) fn units(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut units = Vec::new();
    let mut start = 0;
    while start < tokens.len() {
        let end = group_end(tokens, start).map_or(start + 1, |close| close + 1);
        units.push(start..end);
        start = end;
    }
    units
}

/// Index of the closer matching the opener at `open`, or `None` if the token
/// there is not an opener.
fn group_end(tokens: &[Token], open: usize) -> Option<usize> {
    if !matches!(tokens.get(open), Some(Token::Open { .. })) {
        return None;
    }
    let mut depth = 0usize;
    for (offset, token) in tokens[open..].iter().enumerate() {
        match token {
            Token::Open { .. } => depth += 1,
            Token::Close(_) => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            },
            _ => {},
        }
    }
    Some(tokens.len() - 1)
}

/// The token of a one-token unit.
pub(in crate::interpreter::parser) fn single<'t>(tokens: &'t [Token],
                                                   unit: &Range<usize>)
                                                   -> Option<&'t Token> {
    (unit.len() == 1).then(|| &tokens[unit.start])
}

/// Whether a unit is an operand: a group, a number or a name.
pub(in crate::interpreter::parser) fn is_operand(tokens: &[Token], unit: &Range<usize>) -> bool {
    single(tokens, unit).is_none_or(|token| !token.is_operator())
}

/// Splits a slice on top-level separator tokens.
///
/// # Parameters
/// - `tokens`: The slice to split.
/// - `is_separator`: Decides which top-level tokens separate.
///
/// # Returns
/// The `n + 1` segments and the `n` separators between them.
pub(in crate::interpreter::parser) fn split_top_level<'t, F>(tokens: &'t [Token],
                                                             is_separator: F)
                                                             -> (Vec<&'t [Token]>, Vec<&'t Token>)
    where F: Fn(&Token) -> bool
{
    let mut segments = Vec::new();
    let mut separators = Vec::new();
    let mut start = 0;

    for unit in units(tokens) {
        if let Some(token) = single(tokens, &unit)
           && is_separator(token)
        {
            segments.push(&tokens[start..unit.start]);
            separators.push(token);
            start = unit.end;
        }
    }
    segments.push(&tokens[start..]);
    (segments, separators)
}
