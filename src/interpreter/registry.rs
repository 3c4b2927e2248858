use rand::Rng;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of already-evaluated arguments whose length has
/// been validated against the registered arity at parse time, and returns the
/// raw numeric result. Domain violations (e.g. `sqrt(-1)`) surface as NaN and
/// are rejected by the result validator, not here.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exactly(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A fixed argument count.
    Exactly(usize),
    /// A variable argument count with a lower bound (`min`/`max`).
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::registry::Arity;
    ///
    /// assert!(Arity::Exactly(2).check(2));
    /// assert!(!Arity::Exactly(2).check(3));
    /// assert!(Arity::AtLeast(1).check(5));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(&self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == *n,
            Self::AtLeast(n) => count >= *n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A single entry in the function registry.
///
/// Entries are immutable and process-wide; the table is baked into the
/// binary and never mutated, so concurrent lookups need no synchronization.
pub struct FunctionEntry {
    /// The lowercase function name.
    pub name:  &'static str,
    /// The accepted argument count.
    pub arity: Arity,
    /// The numeric implementation.
    pub apply: BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name (lowercase),
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `FUNCTION_TABLE` (static table for lookup),
/// - `FUNCTION_NAMES` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[FunctionEntry] = &[
            $(
                FunctionEntry { name: $name, arity: $arity, apply: $func },
            )*
        ];
        /// The names of all registered functions, in registration order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"    => { arity: Arity::Exactly(1), func: |args| args[0].sin() },
    "cos"    => { arity: Arity::Exactly(1), func: |args| args[0].cos() },
    "tan"    => { arity: Arity::Exactly(1), func: |args| args[0].tan() },
    "asin"   => { arity: Arity::Exactly(1), func: |args| args[0].asin() },
    "acos"   => { arity: Arity::Exactly(1), func: |args| args[0].acos() },
    "atan"   => { arity: Arity::Exactly(1), func: |args| args[0].atan() },
    "atan2"  => { arity: Arity::Exactly(2), func: |args| args[0].atan2(args[1]) },
    "sind"   => { arity: Arity::Exactly(1), func: |args| args[0].to_radians().sin() },
    "cosd"   => { arity: Arity::Exactly(1), func: |args| args[0].to_radians().cos() },
    "tand"   => { arity: Arity::Exactly(1), func: |args| args[0].to_radians().tan() },
    "sinh"   => { arity: Arity::Exactly(1), func: |args| args[0].sinh() },
    "cosh"   => { arity: Arity::Exactly(1), func: |args| args[0].cosh() },
    "tanh"   => { arity: Arity::Exactly(1), func: |args| args[0].tanh() },
    "asinh"  => { arity: Arity::Exactly(1), func: |args| args[0].asinh() },
    "acosh"  => { arity: Arity::Exactly(1), func: |args| args[0].acosh() },
    "atanh"  => { arity: Arity::Exactly(1), func: |args| args[0].atanh() },
    "log"    => { arity: Arity::Exactly(1), func: |args| args[0].log10() },
    "ln"     => { arity: Arity::Exactly(1), func: |args| args[0].ln() },
    "exp"    => { arity: Arity::Exactly(1), func: |args| args[0].exp() },
    "pow"    => { arity: Arity::Exactly(2), func: |args| args[0].powf(args[1]) },
    "sqrt"   => { arity: Arity::Exactly(1), func: |args| args[0].sqrt() },
    "cbrt"   => { arity: Arity::Exactly(1), func: |args| args[0].cbrt() },
    "abs"    => { arity: Arity::Exactly(1), func: |args| args[0].abs() },
    "floor"  => { arity: Arity::Exactly(1), func: |args| args[0].floor() },
    "ceil"   => { arity: Arity::Exactly(1), func: |args| args[0].ceil() },
    "round"  => { arity: Arity::Exactly(1), func: |args| args[0].round() },
    "trunc"  => { arity: Arity::Exactly(1), func: |args| args[0].trunc() },
    "min"    => { arity: Arity::AtLeast(1), func: |args| args.iter().copied().fold(f64::INFINITY, nan_propagating_min) },
    "max"    => { arity: Arity::AtLeast(1), func: |args| args.iter().copied().fold(f64::NEG_INFINITY, nan_propagating_max) },
    "random" => { arity: Arity::Exactly(0), func: |_args| rand::rng().random::<f64>() },
}

/// NaN-propagating minimum.
///
/// `f64::min` returns the non-NaN operand when one side is NaN, which would
/// let a domain error vanish inside a `min(...)` argument list. The result
/// validator must see the NaN, so this combiner forwards it.
fn nan_propagating_min(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    left.min(right)
}

/// NaN-propagating maximum. See [`nan_propagating_min`].
fn nan_propagating_max(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    left.max(right)
}

/// A named constant in the registry.
pub struct ConstantEntry {
    /// The lowercase constant name.
    pub name:  &'static str,
    /// The constant value.
    pub value: f64,
}

/// The constant table. Immutable and read-only, like the function table.
static CONSTANT_TABLE: &[ConstantEntry] =
    &[ConstantEntry { name:  "pi",
                      value: std::f64::consts::PI, },
      ConstantEntry { name:  "e",
                      value: std::f64::consts::E, }];

/// The names of all registered constants, in registration order.
pub const CONSTANT_NAMES: &[&str] = &["pi", "e"];

/// Looks up a builtin function by name, case-insensitively.
///
/// # Parameters
/// - `name`: Function name as written by the user.
///
/// # Returns
/// The registry entry, or `None` when the name is not registered.
///
/// # Example
/// ```
/// use mathex::interpreter::registry::{Arity, lookup_function};
///
/// let entry = lookup_function("ATAN2").unwrap();
/// assert_eq!(entry.arity, Arity::Exactly(2));
///
/// assert!(lookup_function("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static FunctionEntry> {
    FUNCTION_TABLE.iter()
                  .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Looks up a named constant, case-insensitively.
///
/// # Parameters
/// - `name`: Constant name as written by the user.
///
/// # Returns
/// The constant value, or `None` when the name is not registered.
///
/// # Example
/// ```
/// use mathex::interpreter::registry::lookup_constant;
///
/// assert_eq!(lookup_constant("PI"), Some(std::f64::consts::PI));
/// assert!(lookup_constant("tau").is_none());
/// ```
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANT_TABLE.iter()
                  .find(|entry| entry.name.eq_ignore_ascii_case(name))
                  .map(|entry| entry.value)
}
