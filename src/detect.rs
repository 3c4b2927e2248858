//! Expression detection.
//!
//! Determines whether free-form input looks like a mathematical expression
//! worth handing to the evaluator. This is a cheap, upstream pre-check: the
//! core pipeline never consults it, and a `true` here is not a promise that
//! evaluation will succeed.

use crate::interpreter::registry;

/// Checks whether `text` looks like a mathematical expression.
///
/// Returns `true` if the text contains a digit together with an arithmetic
/// operator or parenthesis, or if it contains any registered function or
/// constant name as a whole word (case-insensitive).
///
/// # Parameters
/// - `text`: Arbitrary user input.
///
/// # Returns
/// Whether the input is worth evaluating.
///
/// # Example
/// ```
/// use mathex::detect::looks_like_expression;
///
/// assert!(looks_like_expression("2 + 2"));
/// assert!(looks_like_expression("sqrt(9)"));
/// assert!(looks_like_expression("PI"));
/// assert!(!looks_like_expression("hello world"));
/// assert!(!looks_like_expression(""));
/// ```
#[must_use]
pub fn looks_like_expression(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());
    let has_operator = trimmed.chars()
                              .any(|c| matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '(' | ')'));
    if has_digit && has_operator {
        return true;
    }

    trimmed.split(|c: char| !c.is_ascii_alphanumeric())
           .filter(|word| !word.is_empty())
           .any(|word| {
               registry::lookup_function(word).is_some()
               || registry::lookup_constant(word).is_some()
           })
}

#[cfg(test)]
mod tests {
    use super::looks_like_expression;

    #[test]
    fn digits_with_operators_are_expressions() {
        assert!(looks_like_expression("2+2"));
        assert!(looks_like_expression("10 / 4"));
        assert!(looks_like_expression("(1)"));
    }

    #[test]
    fn known_names_are_expressions() {
        assert!(looks_like_expression("sqrt"));
        assert!(looks_like_expression("SIN(0.5)"));
        assert!(looks_like_expression("pi"));
        assert!(looks_like_expression("what is e"));
    }

    #[test]
    fn plain_text_is_not_an_expression() {
        assert!(!looks_like_expression(""));
        assert!(!looks_like_expression("   "));
        assert!(!looks_like_expression("hello world"));
        assert!(!looks_like_expression("sine wave"));
        assert!(!looks_like_expression("42"));
    }
}
