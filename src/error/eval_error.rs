#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
///
/// These are deliberately position-free: by the time evaluation runs, the
/// whole tree has already been validated syntactically, and the failure
/// describes the computation as a whole.
pub enum EvalError {
    /// Attempted division or modulo with a divisor of exactly zero.
    DivisionByZero,
    /// The evaluation produced NaN (e.g. `sqrt(-1)` or `asin(2)`).
    NotANumber,
    /// The evaluation overflowed to positive or negative infinity.
    Infinite,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::NotANumber => write!(f, "The result is not a number."),
            Self::Infinite => write!(f, "The result is infinite."),
        }
    }
}

impl std::error::Error for EvalError {}
