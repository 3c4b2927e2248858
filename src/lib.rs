//! # mathex
//!
//! mathex is a safe arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates the kind of free-form math a user
//! types into a search or command box, with support for standard arithmetic,
//! exponentiation, a library of transcendental and rounding functions, named
//! constants, and degree-mode trigonometry. Code embedded in the input is
//! never executed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::EvaluationError;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all supported constructs.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Keeps ownership strictly tree-shaped: no sharing, no cycles.
pub mod ast;
/// Classifies free-form input as math-like or not.
///
/// This module provides the heuristic pre-check that upstream surfaces use
/// to decide whether input should be evaluated at all. It is never used as a
/// correctness gate by the evaluation pipeline itself.
///
/// # Responsibilities
/// - Detects digits combined with operators.
/// - Detects registered function and constant names as whole words.
pub mod detect;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Errors are a closed, typed taxonomy carrying
/// source offsets where applicable; the pipeline never matches on message
/// strings.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and offending fragments for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Formats evaluation results for display.
///
/// This module renders a finite `f64` the way a calculator surface shows it:
/// whole numbers without a fraction, extreme magnitudes in exponential
/// notation, everything else as a cleaned-up decimal.
///
/// # Responsibilities
/// - Chooses between integer, decimal, and exponential rendering.
/// - Hides floating-point representation artifacts.
pub mod format;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, the function/constant
/// registry, evaluation, and result validation to provide a complete engine
/// for expression evaluation. It exposes the building blocks behind
/// [`evaluate_expression`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, registry, evaluator.
/// - Provides the typed data flow between phases.
/// - Manages the flow of errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic expression string to a finite number.
///
/// The pipeline is text → lexer → parser → evaluator → validator, each stage
/// failing fast with a typed error. Evaluation is synchronous, always
/// terminates (tree depth is bounded by the token count), and holds no state
/// between calls, so independent calls may run concurrently without
/// coordination.
///
/// # Parameters
/// - `text`: The expression as typed by the user.
///
/// # Returns
/// The finite numeric result.
///
/// # Errors
/// Returns an [`EvaluationError`] when the input is empty, fails to lex or
/// parse, divides by zero, or produces a non-finite result. No partial
/// results are ever returned.
///
/// # Examples
/// ```
/// use mathex::evaluate_expression;
///
/// assert_eq!(evaluate_expression("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(evaluate_expression("2x3").unwrap(), 6.0);
/// assert_eq!(evaluate_expression("pow(2, 10)").unwrap(), 1024.0);
///
/// // `-2^2` follows written convention: the minus applies to the power.
/// assert_eq!(evaluate_expression("-2^2").unwrap(), -4.0);
///
/// // Failures are typed, never stringly matched.
/// assert!(evaluate_expression("2 / 0").is_err());
/// assert!(evaluate_expression("").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, EvaluationError> {
    if text.trim().is_empty() {
        return Err(error::ParseError::EmptyInput.into());
    }

    let tokens = interpreter::lexer::tokenize(text)?;
    let expr = interpreter::parser::core::parse(&tokens)?;
    let value = interpreter::evaluator::eval(&expr)?;

    Ok(interpreter::evaluator::validate(value)?)
}
