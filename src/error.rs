/// Evaluation errors.
///
/// Contains all error kinds that can be raised while reducing an expression
/// tree to a number, or while validating the final result. These cover
/// division by zero and non-finite outcomes.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error kinds that can occur during lexing and parsing of an
/// expression. Parse errors include invalid characters, syntax mistakes,
/// unknown names, wrong call arities, and trailing input.
pub mod parse_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// The combined failure type returned by [`crate::evaluate_expression`].
///
/// Every failure is terminal and non-retryable: no stage of the pipeline
/// attempts partial recovery, so the first error short-circuits the whole
/// evaluation. The variants split along the pipeline boundary: everything up
/// to and including tree construction reports a [`ParseError`], everything
/// after reports an [`EvalError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression tree could not be reduced to a finite number.
    Eval(EvalError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for EvaluationError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
