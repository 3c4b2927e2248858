/// Binary-operator parsing levels.
///
/// Contains the left-associative additive and multiplicative levels, the
/// right-associative exponentiation level, and the lookahead rules for
/// implicit multiplication and the standalone `x` multiplication sign.
pub mod binary;
/// Core parsing entry points and primary expressions.
///
/// Contains the `parse` entry point, primary-expression parsing (literals,
/// constants, groupings, function calls), and the shared comma-separated
/// list helper.
pub mod core;
/// Unary-operator parsing.
///
/// Contains unary negation, placed so that a leading minus applies to the
/// whole exponentiation on its right (`-2^2` parses as `-(2^2)`).
pub mod unary;
