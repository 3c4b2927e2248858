use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{binary::parse_exponent, core::ParseResult},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative (`--5` parses as `-(-5)`) and its operand is parsed at
/// the exponent level, which pins down the classic precedence contract:
/// `-2^2` parses as `-(2^2)` and evaluates to `-4`, matching written
/// mathematical convention.
///
/// If no unary operator is present, the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           operand: Box::new(operand),
                           position })
    } else {
        parse_exponent(tokens)
    }
}
