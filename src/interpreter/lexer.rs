use std::{fmt::Display, ops::Range};

use log::{debug, trace, warn};
use logos::Logos;

use crate::{ast::Relation, error::ParseError, interpreter::parser::core::ParseResult};

/// Raw lexemes recognized by logos before bracket balancing.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// Runs of digits and decimal points, such as `3.14` or `.5`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Digits(String),
    /// Names extend over every character that is not a symbol.
    #[regex(r"[^0-9.+\-*∗×/\\%^,:=≠<≤>≥!()\[\]{}| \t\r\n\f][^+\-*∗×/\\%^,:=≠<≤>≥!()\[\]{}| \t\r\n\f]*",
            |lex| lex.slice().to_string(),
            allow_greedy = true)]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `|`
    #[token("|")]
    Pipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `∗`
    #[token("*")]
    #[token("∗")]
    Star,
    /// `×`
    #[token("×")]
    Times,
    /// `/`
    #[token("/")]
    Slash,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `≠` or `!=`
    #[token("≠")]
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `≤` or `<=`
    #[token("≤")]
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `≥` or `>=`
    #[token("≥")]
    #[token(">=")]
    GreaterEqual,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// The four kinds of grouping bracket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `( )`
    Round,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
    /// `| |`, which pairs with itself.
    Bar,
}

impl Bracket {
    /// The opening character.
    #[must_use]
    pub const fn opener(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
            Self::Bar => '|',
        }
    }

    /// The closing character.
    #[must_use]
    pub const fn closer(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
            Self::Bar => '|',
        }
    }
}

/// Operator symbols.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` or `∗`
    Star,
    /// `×`
    Cross,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `,`
    Comma,
    /// `:`
    Colon,
}

impl Symbol {
    /// The character as written.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Cross => '×',
            Self::Slash => '/',
            Self::Backslash => '\\',
            Self::Percent => '%',
            Self::Caret => '^',
            Self::Comma => ',',
            Self::Colon => ':',
        }
    }
}

/// A token of balanced notation.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// A name.
    Identifier(String),
    /// An opening bracket, carrying the name written directly before it.
    Open {
        /// The bracket kind.
        bracket: Bracket,
        /// The absorbed call head, as in `f(`.
        head:    Option<String>,
    },
    /// A closing bracket.
    Close(Bracket),
    /// A bar used as a set-builder separator rather than a bracket.
    Bar,
    /// An operator.
    Operator(Symbol),
    /// A relation.
    Relation(Relation),
}

impl Token {
    /// Whether the token is an operator or a relation.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_) | Self::Relation(_) | Self::Bar)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Open { bracket, head } => {
                write!(f, "{}{}", head.as_deref().unwrap_or_default(), bracket.opener())
            },
            Self::Close(bracket) => write!(f, "{}", bracket.closer()),
            Self::Bar => write!(f, "|"),
            Self::Operator(symbol) => write!(f, "{}", symbol.glyph()),
            Self::Relation(relation) => write!(f, "{relation}"),
        }
    }
}

/// Renders a token slice as text, for error messages.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// A token before bar resolution and balancing.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Resolved(Token),
    Pipe,
}

/// Tokenizes notation, absorbing call heads and balancing brackets.
///
/// Missing openers are synthesized at the front and missing closers appended
/// at the end, so `2+3)` and `(2+3` both tokenize like `(2+3)`.
///
/// # Errors
/// - `UnexpectedCharacter` for text no token matches.
/// - `InvalidNumber` for runs such as `1.2.3`.
/// - `MismatchedBrackets` when a closer does not match the innermost opener.
///
/// # Example
/// ```
/// use mathnote::interpreter::lexer::{Bracket, Token, tokenize};
///
/// let tokens = tokenize("f(x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Open { bracket: Bracket::Round,
///                               head:    Some("f".to_string()), },
///                 Token::Identifier("x".to_string()),
///                 Token::Close(Bracket::Round)]);
/// ```
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let lexemes = lex(text)?;
    let pending = absorb_heads(lexemes)?;
    let tokens = balance(pending)?;
    trace!("Tokenized {text:?} into {}", render(&tokens));
    Ok(tokens)
}

fn lex(text: &str) -> ParseResult<Vec<(Lexeme, Range<usize>)>> {
    let mut lexer = Lexeme::lexer(text);
    let mut lexemes = Vec::new();

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => lexemes.push((lexeme, lexer.span())),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { text: lexer.slice().to_string() });
            },
        }
    }
    Ok(lexemes)
}

/// Converts lexemes to pending tokens, merging a name with an opening
/// bracket that follows it without whitespace.
fn absorb_heads(lexemes: Vec<(Lexeme, Range<usize>)>) -> ParseResult<Vec<Pending>> {
    let mut pending = Vec::with_capacity(lexemes.len());
    let mut lexemes = lexemes.into_iter().peekable();

    while let Some((lexeme, span)) = lexemes.next() {
        let token = match lexeme {
            Lexeme::Digits(digits) => {
                Token::Number(digits.parse()
                                    .map_err(|_| ParseError::InvalidNumber { text: digits })?)
            },
            Lexeme::Identifier(name) => {
                let adjacent = lexemes.peek().and_then(|(next, next_span)| {
                                                 (next_span.start == span.end)
                                                     .then(|| opening_bracket(next))
                                                     .flatten()
                                             });
                if let Some(bracket) = adjacent {
                    lexemes.next();
                    Token::Open { bracket,
                                  head: Some(name) }
                } else {
                    Token::Identifier(name)
                }
            },
            Lexeme::Pipe => {
                pending.push(Pending::Pipe);
                continue;
            },
            other => match opening_bracket(&other) {
                Some(bracket) => Token::Open { bracket,
                                               head: None },
                None => match simple_token(&other) {
                    Some(token) => token,
                    None => continue,
                },
            },
        };
        pending.push(Pending::Resolved(token));
    }
    Ok(pending)
}

const fn opening_bracket(lexeme: &Lexeme) -> Option<Bracket> {
    match lexeme {
        Lexeme::LParen => Some(Bracket::Round),
        Lexeme::LBracket => Some(Bracket::Square),
        Lexeme::LBrace => Some(Bracket::Curly),
        _ => None,
    }
}

const fn simple_token(lexeme: &Lexeme) -> Option<Token> {
    match lexeme {
        Lexeme::RParen => Some(Token::Close(Bracket::Round)),
        Lexeme::RBracket => Some(Token::Close(Bracket::Square)),
        Lexeme::RBrace => Some(Token::Close(Bracket::Curly)),
        Lexeme::Plus => Some(Token::Operator(Symbol::Plus)),
        Lexeme::Minus => Some(Token::Operator(Symbol::Minus)),
        Lexeme::Star => Some(Token::Operator(Symbol::Star)),
        Lexeme::Times => Some(Token::Operator(Symbol::Cross)),
        Lexeme::Slash => Some(Token::Operator(Symbol::Slash)),
        Lexeme::Backslash => Some(Token::Operator(Symbol::Backslash)),
        Lexeme::Percent => Some(Token::Operator(Symbol::Percent)),
        Lexeme::Caret => Some(Token::Operator(Symbol::Caret)),
        Lexeme::Comma => Some(Token::Operator(Symbol::Comma)),
        Lexeme::Colon => Some(Token::Operator(Symbol::Colon)),
        Lexeme::Equals => Some(Token::Relation(Relation::Equal)),
        Lexeme::NotEqual => Some(Token::Relation(Relation::NotEqual)),
        Lexeme::Less => Some(Token::Relation(Relation::Less)),
        Lexeme::LessEqual => Some(Token::Relation(Relation::LessEqual)),
        Lexeme::Greater => Some(Token::Relation(Relation::Greater)),
        Lexeme::GreaterEqual => Some(Token::Relation(Relation::GreaterEqual)),
        _ => None,
    }
}

/// Resolves bars and balances brackets with a stack of open kinds.
///
/// A bar closes an open bar on top of the stack, is a separator when the
/// innermost bracket is curly, and opens otherwise.
fn balance(pending: Vec<Pending>) -> ParseResult<Vec<Token>> {
    let mut stack: Vec<Bracket> = Vec::new();
    let mut synthesized = Vec::new();
    let mut tokens = Vec::with_capacity(pending.len());

    for item in pending {
        let token = match item {
            Pending::Pipe => match stack.last() {
                Some(Bracket::Bar) => {
                    stack.pop();
                    Token::Close(Bracket::Bar)
                },
                Some(Bracket::Curly) => Token::Bar,
                _ => {
                    stack.push(Bracket::Bar);
                    Token::Open { bracket: Bracket::Bar,
                                  head:    None, }
                },
            },
            Pending::Resolved(Token::Open { bracket, head }) => {
                stack.push(bracket);
                Token::Open { bracket, head }
            },
            Pending::Resolved(Token::Close(bracket)) => {
                match stack.pop() {
                    None => {
                        debug!("Synthesizing '{}' for an unmatched '{}'",
                               bracket.opener(),
                               bracket.closer());
                        synthesized.push(bracket);
                    },
                    Some(open) if open == bracket => {},
                    Some(open) => {
                        warn!("Rejecting '{}' inside an open '{}'", bracket.closer(), open.opener());
                        return Err(ParseError::MismatchedBrackets { expected: open.closer(),
                                                                    found:    bracket.closer(), });
                    },
                }
                Token::Close(bracket)
            },
            Pending::Resolved(token) => token,
        };
        tokens.push(token);
    }

    if !stack.is_empty() {
        debug!("Appending {} missing closer(s)", stack.len());
    }
    tokens.extend(stack.into_iter().rev().map(Token::Close));

    // Later unmatched closers get the outer openers.
    let front = synthesized.iter().rev().map(|bracket| Token::Open { bracket: *bracket,
                                                                     head:    None, });
    Ok(front.chain(tokens).collect())
}
