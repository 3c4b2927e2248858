use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::registry,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a raw `f64`.
///
/// This is a pure recursive reduction: no mutable state is shared between
/// nodes, and the only side effect anywhere in the tree is the `random`
/// builtin drawing from the thread-local generator. Constants are resolved
/// against the registry here, at evaluation time; the parser has already
/// guaranteed that every name and every call arity is valid, so resolution
/// cannot fail.
///
/// Division and modulo check their divisor for exact zero before operating,
/// so `2/0` reports [`EvalError::DivisionByZero`] instead of producing an
/// infinity. All other non-finite outcomes (overflow, domain errors
/// surfacing as NaN) are left to [`validate`], which keeps this function
/// total over everything the operations themselves can produce.
///
/// # Parameters
/// - `expr`: Root of the expression tree.
///
/// # Returns
/// The reduced numeric value, possibly non-finite.
///
/// # Errors
/// [`EvalError::DivisionByZero`] for a zero divisor.
///
/// # Example
/// ```
/// use mathex::{
///     interpreter::{evaluator::eval, lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(eval(&expr).unwrap(), 14.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),

        // The parser only emits names it resolved against the registry.
        Expr::Constant { name, .. } => Ok(registry::lookup_constant(name).unwrap_or(f64::NAN)),

        Expr::UnaryOp { op: UnaryOperator::Negate,
                        operand,
                        .. } => Ok(-eval(operand)?),

        Expr::BinaryOp { left, op, right, .. } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(left, *op, right)
        },

        Expr::Call { name, arguments, .. } => {
            let mut values = Vec::with_capacity(arguments.len());
            for argument in arguments {
                values.push(eval(argument)?);
            }
            match registry::lookup_function(name) {
                Some(entry) => Ok((entry.apply)(&values)),
                None => Ok(f64::NAN),
            }
        },
    }
}

/// Applies a binary operator to two reduced operands.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when `op` is `/` or `%` and `right` is
/// exactly zero. The check happens before the operation; it is never
/// inferred from the result.
fn eval_binary(left: f64, op: BinaryOperator, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        BinaryOperator::Mod => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left % right)
        },
        BinaryOperator::Pow => Ok(left.powf(right)),
    }
}

/// Validates a reduced result, rejecting non-finite values.
///
/// Infinite results (e.g. `10^1000`) and NaN results (e.g. `sqrt(-1)`,
/// `asin(2)`, or a negative base raised to a fractional exponent) are
/// rejected with distinct error kinds. A finite zero or negative value is
/// always valid.
///
/// # Parameters
/// - `value`: The fully reduced result.
///
/// # Returns
/// The same value when it is finite.
///
/// # Errors
/// - [`EvalError::NotANumber`] when the value is NaN.
/// - [`EvalError::Infinite`] when the value is ±∞.
///
/// # Example
/// ```
/// use mathex::{error::EvalError, interpreter::evaluator::validate};
///
/// assert_eq!(validate(-1.5), Ok(-1.5));
/// assert_eq!(validate(f64::NAN), Err(EvalError::NotANumber));
/// assert_eq!(validate(f64::INFINITY), Err(EvalError::Infinite));
/// ```
pub fn validate(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        return Err(EvalError::NotANumber);
    }
    if value.is_infinite() {
        return Err(EvalError::Infinite);
    }
    Ok(value)
}
