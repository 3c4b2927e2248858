use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_primary},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and `%`, and two further
/// notations that bind at the same level:
///
/// 1. **The standalone `x` multiplication sign.** A lone `x` (or `X`)
///    identifier with a just-parsed operand on its left and the start of an
///    operand on its right is the informal multiplication sign (`2x3`). The
///    decision is made by lookahead, never by text substitution, so an `x`
///    inside a longer identifier such as `exp` or `max` is untouched.
/// 2. **Implicit multiplication.** An operand directly followed by `(` or by
///    an identifier multiplies (`2(3+4)`, `2pi`). Two adjacent number
///    literals are *not* joined this way; they fall through to a trailing-
///    token error instead of silently multiplying.
///
/// The rule is:
/// `multiplicative := unary (("*" | "/" | "%" | x-sign | implicit) unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        let Some((token, position)) = tokens.peek() else {
            break;
        };
        let position = *position;
        let token = token.clone();

        if let Some(op) = token_to_binary_operator(&token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        if x_is_multiplication_sign(tokens) {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Mul,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        if matches!(token, Token::LParen | Token::Identifier(_)) {
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Mul,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The right
/// operand is parsed at the unary level, so a minus on the right applies to
/// the whole exponent that follows it (`2^-3^2` is `2^(-(3^2))`).
///
/// The rule is: `exponent := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_primary(tokens)?;
    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   position });
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `^`). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use mathex::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Decides whether the upcoming identifier is the standalone multiplication
/// sign.
///
/// True only when the next token is a lone `x`/`X` identifier and the token
/// after it can start an operand (a number, `(`, or an identifier). The
/// caller guarantees that a complete operand was just parsed on the left;
/// any such operand counts, so `pi x 2` multiplies just like `2 x 3`.
/// An `x` that fails this test is left alone; it will surface as an unknown
/// identifier further down the grammar.
///
/// Maximal-munch lexing means any `x` that begins or ends a longer name
/// (`exp`, `max`) never reaches this check as its own token.
fn x_is_multiplication_sign<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut ahead = tokens.clone();
    match ahead.next() {
        Some((Token::Identifier(name), _)) if name.eq_ignore_ascii_case("x") => {},
        _ => return false,
    }
    matches!(ahead.next(),
             Some((Token::Number(_) | Token::LParen | Token::Identifier(_), _)))
}
