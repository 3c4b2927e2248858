/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers every construct the evaluator understands: numeric literals,
/// named constants, unary negation, binary arithmetic, and calls into the
/// builtin function registry. Each variant carries the byte offset of the
/// construct in the source text for error reporting.
///
/// Every node owns its children exclusively; an expression is always a tree,
/// never a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A reference to a named constant such as `pi`.
    ///
    /// The name is kept symbolic here and resolved against the registry at
    /// evaluation time; the parser only verifies that the name exists.
    Constant {
        /// The (lowercased) constant name.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (addition, division, exponentiation, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A call into the function registry (e.g. `sin(x)`).
    ///
    /// The argument count always matches the arity registered for `name`;
    /// the parser rejects mismatches before a `Call` node is ever built.
    Call {
        /// The (lowercased) function name.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use mathex::ast::Expr;
    ///
    /// let expr = Expr::Number { value:    2.0,
    ///                           position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Constant { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
