use std::fmt::Write;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ResolveError,
};

/// The result alias used by every resolution routine.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Resolves an expression tree to every value it can take.
///
/// A tree without multi-possibility nodes resolves to exactly one value. Each
/// [`Expr::MultiPossibility`] multiplies the count: a binary node combines
/// every value of its left operand with every value of its right operand, in
/// left-major order, and a possibility list contributes its branches in
/// source order.
///
/// # Parameters
/// - `expr`: Expression tree to resolve.
///
/// # Returns
/// All values of the expression, ordered by nested iteration over its branch
/// points.
///
/// # Errors
/// [`ResolveError::ResolvingVariable`] when the tree still contains the
/// variable, [`ResolveError::ResolvingEquation`] when it is an equation, and
/// [`ResolveError::NonIntegerFactorial`] when a factorial meets a
/// non-integral value.
///
/// # Example
/// ```
/// use isola::interpreter::{evaluator::resolve, parser::core::parse};
///
/// let parsed = parse("{1, 2} * 10")?;
///
/// assert_eq!(resolve(&parsed.expr)?, vec![10.0, 20.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve(expr: &Expr) -> ResolveResult<Vec<f64>> {
    match expr {
        Expr::Number(value) => Ok(vec![*value]),
        Expr::Variable => Err(ResolveError::ResolvingVariable),
        Expr::Equation { .. } => Err(ResolveError::ResolvingEquation),
        Expr::UnaryOp { op, expr } => {
            let operands = resolve(expr)?;
            let mut results = Vec::with_capacity(operands.len());
            for operand in operands {
                results.push(apply_unary(*op, operand)?);
            }
            Ok(results)
        },
        Expr::BinaryOp { left, op, right } => {
            let lefts = resolve(left)?;
            let rights = resolve(right)?;
            let mut results = Vec::with_capacity(lefts.len() * rights.len());
            for left in &lefts {
                for right in &rights {
                    results.push(apply_binary(*left, *op, *right));
                }
            }
            Ok(results)
        },
        Expr::MultiPossibility(branches) => {
            let mut results = Vec::new();
            for branch in branches {
                results.extend(resolve(branch)?);
            }
            Ok(results)
        },
    }
}

/// Applies a binary operator to two values.
///
/// Division and modulus by zero follow floating-point semantics and produce
/// infinity or NaN instead of failing. The modulus is the truncating
/// remainder, so its sign follows the dividend.
///
/// # Parameters
/// - `left`: Left operand.
/// - `op`: Operator to apply.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value.
#[must_use]
pub fn apply_binary(left: f64, op: BinaryOperator, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
        BinaryOperator::Mod => left % right,
    }
}

/// Applies a unary operator to a value.
///
/// # Parameters
/// - `op`: Operator to apply.
/// - `value`: Operand.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// [`ResolveError::NonIntegerFactorial`] when the factorial meets a
/// non-integral value.
pub fn apply_unary(op: UnaryOperator, value: f64) -> ResolveResult<f64> {
    match op {
        UnaryOperator::Negation => Ok(-value),
        UnaryOperator::AbsoluteValue => Ok(value.abs()),
        UnaryOperator::Factorial => factorial(value),
    }
}

/// Computes the factorial of an integral value.
///
/// The factorial is only defined for values that equal their own rounding.
/// There is no Gamma-function extension for the rest. The result is the
/// product of `1..n`, which makes the factorial of every value below `2`,
/// negative integers included, equal to `1`.
///
/// # Parameters
/// - `value`: Operand, which must be integral.
///
/// # Returns
/// The factorial of the value.
///
/// # Errors
/// [`ResolveError::NonIntegerFactorial`] when the value is not integral.
///
/// # Example
/// ```
/// use isola::interpreter::evaluator::factorial;
///
/// assert_eq!(factorial(4.0)?, 24.0);
/// assert!(factorial(3.5).is_err());
/// # Ok::<(), isola::error::ResolveError>(())
/// ```
pub fn factorial(value: f64) -> ResolveResult<f64> {
    if !value.is_finite() || value.round() != value {
        return Err(ResolveError::NonIntegerFactorial { value });
    }
    let mut product = 1.0;
    let mut factor = 2.0;
    while factor <= value {
        product *= factor;
        // Once the product saturates, later factors cannot change it.
        if product.is_infinite() {
            break;
        }
        factor += 1.0;
    }
    Ok(product)
}

/// Renders a list of resolved values in set notation.
///
/// A single value renders bare, while several render comma-joined inside
/// braces. An empty list renders as `{}`.
///
/// # Parameters
/// - `values`: Values to render.
///
/// # Returns
/// The rendered list.
///
/// # Example
/// ```
/// use isola::interpreter::evaluator::render_results;
///
/// assert_eq!(render_results(&[4.0]), "4");
/// assert_eq!(render_results(&[7.0, 3.0]), "{7, 3}");
/// ```
#[must_use]
pub fn render_results(values: &[f64]) -> String {
    match values {
        [only] => only.to_string(),
        values => {
            let mut rendered = String::from("{");
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    rendered.push_str(", ");
                }
                let _ = write!(rendered, "{value}");
            }
            rendered.push('}');
            rendered
        },
    }
}
