use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive, registry},
};

/// Result type used by all parsing functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// This is the entry point for parsing. The whole token sequence must form
/// exactly one expression: an empty sequence fails with
/// [`ParseError::EmptyInput`], and any tokens left over after a complete
/// expression fail with [`ParseError::TrailingTokens`].
///
/// # Parameters
/// - `tokens`: The full `(Token, offset)` sequence produced by the lexer.
///
/// # Returns
/// The root expression node.
///
/// # Errors
/// Any [`ParseError`] raised while descending the grammar.
///
/// # Example
/// ```
/// use mathex::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1 + 2 )").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::TrailingTokens { found:    format!("{token:?}"),
                                                position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - named constants
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators; it dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(_), _) => parse_number(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (tok, position) => {
            Err(ParseError::UnexpectedToken { expected: "a number, a name, or '('".to_string(),
                                              found:    format!("{tok:?}"),
                                              position: *position, })
        },
    }
}

/// Parses a numeric literal.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Number { value:    *value,
                                                                    position: *position, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen` carrying the offset
/// of the unmatched `(`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses an identifier as either a constant reference or a function call.
///
/// Supported forms:
///
/// - `name`: must be a registered constant (`pi`, `e`);
/// - `name(arg1, arg2, ...)`: must be a registered function, and the
///   argument count must satisfy its registered arity.
///
/// Classification is driven entirely by the registry: an identifier that
/// names neither a constant nor a function fails with
/// [`ParseError::UnknownIdentifier`], and a function name without a call
/// argument list is an [`ParseError::UnexpectedToken`]. Arity violations are
/// rejected here, at parse time, so the evaluator never sees a malformed
/// call.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Constant`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not registered,
/// - the argument count does not satisfy the registered arity,
/// - the argument list is malformed or unterminated.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!(),
    };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

        let Some(entry) = registry::lookup_function(&name) else {
            return Err(ParseError::UnknownIdentifier { name, position });
        };
        if !entry.arity.check(arguments.len()) {
            return Err(ParseError::WrongArgumentCount { name,
                                                        expected: entry.arity.to_string(),
                                                        found: arguments.len(),
                                                        position });
        }

        return Ok(Expr::Call { name: name.to_ascii_lowercase(),
                               arguments,
                               position });
    }

    if registry::lookup_constant(&name).is_some() {
        return Ok(Expr::Constant { name: name.to_ascii_lowercase(),
                                   position });
    }

    if registry::lookup_function(&name).is_some() {
        return Err(ParseError::UnexpectedToken { expected: format!("'(' after the function name '{name}'"),
                                                 found: "no argument list".to_string(),
                                                 position });
    }

    Err(ParseError::UnknownIdentifier { name, position })
}

/// Parses a comma-separated list of items until a closing token.
///
/// The function-call argument list is the only caller today, but the helper
/// stays generic over the item parser and closing token, matching its use in
/// the grammar. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
fn parse_comma_separated<'a, I, T>(tokens: &mut Peekable<I>,
                                   parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
                                   closing: &Token)
                                   -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && *tok == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if *tok == *closing => {
                tokens.next();
                break;
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' or {closing:?}"),
                                                         found:    format!("{tok:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}
