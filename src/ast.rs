/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the language can express: numeric literals,
/// binary and unary operations, the bound variable, a top-level equation, and
/// multi-valued expressions introduced by `±` or `{a, b}` syntax. Trees are
/// immutable; simplification and solving always build new nodes instead of
/// mutating existing ones.
///
/// The bound variable is a sentinel without a payload. Its textual name is
/// tracked once per parse, outside the tree (see
/// [`Parsed`](crate::interpreter::parser::core::Parsed)), because only one
/// variable identity is ever legal per input.
///
/// Rendering via [`std::fmt::Display`] produces infix notation: operands are
/// parenthesized unless they are a number, the variable, or a unary
/// operation, equations render as `left = right`, and multi-valued
/// expressions use set notation (`{}` when empty, the bare branch when
/// singleton). The variable sentinel always renders as `x`.
///
/// ## Example
/// ```
/// use isola::ast::{Expr, add, mul};
///
/// let expr = mul(Expr::Number(2.0), add(Expr::Variable, Expr::Number(1.0)));
/// assert_eq!(expr.to_string(), "2 * (x + 1)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (negation, factorial, absolute value).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// The bound variable of the current input.
    Variable,
    /// An equation; legal only as the root of a parsed tree.
    Equation {
        /// Left-hand side.
        left:  Box<Self>,
        /// Right-hand side.
        right: Box<Self>,
    },
    /// A disjunction of candidate values: the expression denotes any one of
    /// the branches. Zero branches denote the empty result set; a singleton
    /// is equivalent to its branch (the simplifier collapses it).
    MultiPossibility(Vec<Self>),
}

impl Expr {
    /// Reports whether the bound variable occurs anywhere in `self`.
    ///
    /// ## Example
    /// ```
    /// use isola::ast::{Expr, add};
    ///
    /// let expr = add(Expr::Variable, Expr::Number(3.0));
    /// assert!(expr.contains_variable());
    /// assert!(!Expr::Number(3.0).contains_variable());
    /// ```
    #[must_use]
    pub fn contains_variable(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable => true,
            Self::UnaryOp { expr, .. } => expr.contains_variable(),
            Self::BinaryOp { left, right, .. } | Self::Equation { left, right } => {
                left.contains_variable() || right.contains_variable()
            },
            Self::MultiPossibility(branches) => branches.iter().any(Self::contains_variable),
        }
    }
}

/// Builds an addition node from two owned operands.
#[must_use]
pub fn add(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Add, right)
}

/// Builds a subtraction node from two owned operands.
#[must_use]
pub fn sub(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Sub, right)
}

/// Builds a multiplication node from two owned operands.
#[must_use]
pub fn mul(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Mul, right)
}

/// Builds a division node from two owned operands.
#[must_use]
pub fn div(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Div, right)
}

/// Builds an exponentiation node from two owned operands.
#[must_use]
pub fn pow(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Pow, right)
}

/// Builds a binary node for an arbitrary operator.
///
/// ## Example
/// ```
/// use isola::ast::{BinaryOperator, Expr, binary};
///
/// let expr = binary(Expr::Number(7.0), BinaryOperator::Mod, Expr::Number(3.0));
/// assert_eq!(expr.to_string(), "7 % 3");
/// ```
#[must_use]
pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}

/// Wraps an expression in a negation node.
#[must_use]
pub fn neg(expr: Expr) -> Expr {
    Expr::UnaryOp { op:   UnaryOperator::Negation,
                    expr: Box::new(expr), }
}

/// Represents a binary operator.
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
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negation,
    /// Factorial (e.g. `4!`).
    Factorial,
    /// Absolute value (e.g. `|x|`).
    AbsoluteValue,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),

            Self::Variable => write!(f, "x"),

            Self::BinaryOp { left, op, right } => {
                write_operand(f, left)?;
                write!(f, " {op} ")?;
                write_operand(f, right)
            },

            Self::UnaryOp { op, expr } => match op {
                UnaryOperator::Negation => {
                    write!(f, "-")?;
                    write_operand(f, expr)
                },
                UnaryOperator::Factorial => {
                    write_operand(f, expr)?;
                    write!(f, "!")
                },
                UnaryOperator::AbsoluteValue => write!(f, "|{expr}|"),
            },

            Self::Equation { left, right } => write!(f, "{left} = {right}"),

            Self::MultiPossibility(branches) => match branches.as_slice() {
                [] => write!(f, "{{}}"),
                [only] => write!(f, "{only}"),
                _ => {
                    write!(f, "{{")?;
                    for (i, branch) in branches.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{branch}")?;
                    }
                    write!(f, "}}")
                },
            },
        }
    }
}

/// Writes one operand of a composite node, parenthesizing it unless it is a
/// number, the variable, or a unary operation.
fn write_operand(f: &mut std::fmt::Formatter<'_>, operand: &Expr) -> std::fmt::Result {
    match operand {
        Expr::Number(_) | Expr::Variable | Expr::UnaryOp { .. } => write!(f, "{operand}"),
        _ => write!(f, "({operand})"),
    }
}
