use crate::ast::{BinaryOperator, Expr, UnaryOperator, mul, pow};

/// Extracts the constant multiple of a first-degree term.
///
/// Recognizes exactly `c * x`, `x * c`, bare `x` (coefficient `1`), and
/// negations of those. Anything else, the variable's absence included, is
/// no match rather than an error.
///
/// # Parameters
/// - `expr`: Candidate term.
///
/// # Returns
/// `Some(c)` when the term is a constant multiple of the variable, otherwise
/// `None`.
///
/// # Example
/// ```
/// use isola::{algebra::terms::coefficient, ast::{Expr, mul, neg}};
///
/// let term = neg(mul(Expr::Number(2.0), Expr::Variable));
///
/// assert_eq!(coefficient(&term), Some(-2.0));
/// assert_eq!(coefficient(&Expr::Number(2.0)), None);
/// ```
#[must_use]
pub fn coefficient(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Variable => Some(1.0),
        Expr::BinaryOp { left, op: BinaryOperator::Mul, right } => {
            match (left.as_ref(), right.as_ref()) {
                (Expr::Number(value), Expr::Variable)
                | (Expr::Variable, Expr::Number(value)) => Some(*value),
                _ => None,
            }
        },
        Expr::UnaryOp { op: UnaryOperator::Negation, expr } => {
            coefficient(expr).map(|value| -value)
        },
        _ => None,
    }
}

/// Extracts the power to which a term raises the variable.
///
/// Recognizes exactly `x ^ d` with a numeric exponent and bare `x`
/// (degree `1`). Anything else is no match.
///
/// # Parameters
/// - `expr`: Candidate term.
///
/// # Returns
/// `Some(d)` when the term is a power of the variable, otherwise `None`.
#[must_use]
pub fn degree(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Variable => Some(1.0),
        Expr::BinaryOp { left, op: BinaryOperator::Pow, right } => {
            match (left.as_ref(), right.as_ref()) {
                (Expr::Variable, Expr::Number(value)) => Some(*value),
                _ => None,
            }
        },
        _ => None,
    }
}

/// Extracts both the coefficient and the degree of a monomial.
///
/// Recognizes `c * x^d` (in either operand order), every shape
/// [`coefficient`] and [`degree`] recognize on their own, and negations of
/// all of those. Anything else is no match.
///
/// # Parameters
/// - `expr`: Candidate term.
///
/// # Returns
/// `Some((c, d))` when the term is a monomial in the variable, otherwise
/// `None`.
///
/// # Example
/// ```
/// use isola::{algebra::terms::coefficient_and_degree, ast::{Expr, mul, pow}};
///
/// let term = mul(Expr::Number(2.0), pow(Expr::Variable, Expr::Number(3.0)));
///
/// assert_eq!(coefficient_and_degree(&term), Some((2.0, 3.0)));
/// assert_eq!(coefficient_and_degree(&Expr::Variable), Some((1.0, 1.0)));
/// ```
#[must_use]
pub fn coefficient_and_degree(expr: &Expr) -> Option<(f64, f64)> {
    if let Some(value) = degree(expr) {
        return Some((1.0, value));
    }
    match expr {
        Expr::BinaryOp { left, op: BinaryOperator::Mul, right } => {
            match (left.as_ref(), right.as_ref()) {
                (Expr::Number(value), power) | (power, Expr::Number(value)) => {
                    degree(power).map(|d| (*value, d))
                },
                _ => None,
            }
        },
        Expr::UnaryOp { op: UnaryOperator::Negation, expr } => {
            coefficient_and_degree(expr).map(|(c, d)| (-c, d))
        },
        _ => None,
    }
}

/// Builds the canonical tree for a monomial.
///
/// Degree `1` builds `c * x`; any other degree builds `c * x^d`. The result
/// is not simplified, so a coefficient of `1` or `0` still appears
/// literally until the caller simplifies it away.
///
/// # Parameters
/// - `coefficient`: Constant multiple.
/// - `degree`: Power of the variable.
///
/// # Returns
/// The monomial's expression tree.
#[must_use]
pub fn monomial(coefficient: f64, degree: f64) -> Expr {
    if degree == 1.0 {
        return mul(Expr::Number(coefficient), Expr::Variable);
    }
    mul(Expr::Number(coefficient),
        pow(Expr::Variable, Expr::Number(degree)))
}
