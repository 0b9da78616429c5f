/// The lexer module tokenizes notation for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens: numbers,
/// names, brackets, operators and relations. It absorbs a name written
/// directly before a bracket as a call head and balances brackets, inserting
/// missing openers and closers.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Resolves whether a bar opens, closes or separates.
/// - Reports mismatched brackets and malformed numbers.
pub mod lexer;
/// The parser module builds statement trees from tokens.
///
/// The parser processes the balanced token stream and constructs an
/// unsimplified [`crate::ast::Statement`].
///
/// # Responsibilities
/// - Splits statements on relations into comparisons.
/// - Splits expressions at their loosest operator by rank.
/// - Parses groups, calls, sets and set-builders.
pub mod parser;
/// The simplifier module reduces statement trees to normal form.
///
/// The simplifier evaluates constants, resolves names against a workspace,
/// applies identities to whatever stays symbolic and performs the stores of
/// assignments and definitions.
pub mod simplifier;
/// The value module defines the numeric kernel.
///
/// Complex constants with physical dimensions, their arithmetic, tolerance
/// and rendering.
pub mod value;
/// The workspace module stores a session's definitions.
///
/// Holds variable values and function definitions, together with the
/// localized child workspaces function bodies are simplified in.
pub mod workspace;
