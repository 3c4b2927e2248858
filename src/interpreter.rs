/// The evaluator module reduces AST nodes to numeric results.
///
/// The evaluator traverses the expression tree, applies arithmetic and
/// registry functions, and produces a single `f64`. It also hosts the result
/// validator that rejects NaN and infinite outcomes.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Checks divisors for zero before dividing.
/// - Reports runtime errors such as division by zero or non-finite results.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens, each corresponding to a meaningful element such as a number, an
/// identifier, an operator, a parenthesis, or a comma. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles numeric literals, identifiers, and single-character operators.
/// - Reports lexical errors for characters outside the accepted set.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the expression under standard operator precedence.
/// It consults the registry to classify identifiers and to validate call
/// arities, so that evaluation can never encounter an unknown name.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Models precedence and associativity explicitly, including implicit
///   multiplication and the standalone `x` multiplication sign.
/// - Validates grammar and arity, reporting errors with source offsets.
pub mod parser;
/// The registry module holds the closed function and constant tables.
///
/// Every name the parser accepts and every operation the evaluator applies
/// comes from this module. The tables are static and immutable: they are
/// built once at compile time and only ever read, which makes concurrent
/// evaluation safe without any locking.
///
/// # Responsibilities
/// - Defines the builtin function table with per-entry arities.
/// - Defines the named-constant table.
/// - Provides case-insensitive lookup for both.
pub mod registry;
