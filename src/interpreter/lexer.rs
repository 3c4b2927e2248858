use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; function or constant names such as `sin` or `pi`.
    ///
    /// The lexer does not classify identifiers; the parser resolves them
    /// against the registry. Maximal munch guarantees that a name like
    /// `sind` is never split into `sin` + `d`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace of any kind.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression string into an ordered `(Token, offset)` sequence.
///
/// Each token is paired with the byte offset where it starts in `text`, used
/// for diagnostics. Whitespace is skipped. The first character outside the
/// accepted lexical set aborts tokenization; no partial token stream is ever
/// returned.
///
/// # Parameters
/// - `text`: The raw expression text.
///
/// # Returns
/// The full token sequence in left-to-right order.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for any character the lexer does
/// not recognize.
///
/// # Example
/// ```
/// use mathex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0),
///                 (Token::Plus, 2),
///                 (Token::Number(2.0), 4)]);
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                return Err(ParseError::InvalidCharacter { character: lexer.slice()
                                                                          .chars()
                                                                          .next()
                                                                          .unwrap_or('\u{fffd}'),
                                                          position:  lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
