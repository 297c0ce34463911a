use crate::{
    algebra::terms::{coefficient_and_degree, monomial},
    ast::{BinaryOperator, Expr, UnaryOperator, div, mul, neg},
    interpreter::evaluator::{apply_binary, apply_unary},
};

/// Rewrites an expression tree into a structurally smaller equivalent.
///
/// The rewrite is bottom-up and total. Constant subtrees fold into single
/// numbers, identity operands vanish, like terms merge, and constant factors
/// distribute over sums, all without changing the values the tree resolves
/// to. A factorial of a non-integral constant stays unfolded so that
/// resolution reports it.
///
/// Simplifying an already-simplified tree returns it unchanged, but distinct
/// spellings of the same polynomial do not all reach one normal form.
///
/// # Parameters
/// - `expr`: Expression tree to rewrite.
///
/// # Returns
/// The simplified tree.
///
/// # Example
/// ```
/// use isola::{algebra::simplifier::simplify, interpreter::parser::core::parse};
///
/// let parsed = parse("2 * x + 3 * x")?;
///
/// assert_eq!(simplify(parsed.expr).to_string(), "5 * x");
/// # Ok::<(), isola::error::ParseError>(())
/// ```
#[must_use]
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable => expr,
        Expr::UnaryOp { op, expr } => simplify_unary(op, simplify(*expr)),
        Expr::BinaryOp { left, op, right } => {
            simplify_binary(simplify(*left), op, simplify(*right))
        },
        Expr::Equation { left, right } => {
            Expr::Equation { left:  Box::new(simplify(*left)),
                             right: Box::new(simplify(*right)), }
        },
        Expr::MultiPossibility(branches) => {
            let mut branches: Vec<Expr> = branches.into_iter().map(simplify).collect();
            if branches.len() == 1 {
                return branches.remove(0);
            }
            Expr::MultiPossibility(branches)
        },
    }
}

/// Simplifies a unary node whose operand is already simplified.
fn simplify_unary(op: UnaryOperator, operand: Expr) -> Expr {
    match (op, operand) {
        (op, Expr::Number(value)) => {
            if let Ok(folded) = apply_unary(op, value) {
                return Expr::Number(folded);
            }
            Expr::UnaryOp { op,
                            expr: Box::new(Expr::Number(value)), }
        },
        (UnaryOperator::Negation,
         Expr::UnaryOp { op: UnaryOperator::Negation, expr }) => *expr,
        (op, operand) => Expr::UnaryOp { op,
                                         expr: Box::new(operand), },
    }
}

/// Simplifies a binary node whose operands are already simplified.
fn simplify_binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    if let (Expr::Number(left), Expr::Number(right)) = (&left, &right) {
        return Expr::Number(apply_binary(*left, op, *right));
    }
    if op == BinaryOperator::Mul {
        if number_of(&left) == Some(0.0) || number_of(&right) == Some(0.0) {
            return Expr::Number(0.0);
        }
        if number_of(&left) == Some(1.0) {
            return right;
        }
        if number_of(&right) == Some(1.0) {
            return left;
        }
        if number_of(&left) == Some(-1.0) {
            return neg(right);
        }
        if number_of(&right) == Some(-1.0) {
            return neg(left);
        }
    }
    if op == BinaryOperator::Div && number_of(&right) == Some(1.0) {
        return left;
    }
    if op == BinaryOperator::Pow {
        if number_of(&right) == Some(0.0) {
            return Expr::Number(1.0);
        }
        if number_of(&right) == Some(1.0) {
            return left;
        }
    }
    if matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
       && let Some((left_coefficient, left_degree)) = coefficient_and_degree(&left)
       && let Some((right_coefficient, right_degree)) = coefficient_and_degree(&right)
       && left_degree == right_degree
    {
        let combined = match op {
            BinaryOperator::Add => left_coefficient + right_coefficient,
            _ => left_coefficient - right_coefficient,
        };
        return simplify(monomial(combined, left_degree));
    }
    match (left, op, right) {
        (Expr::Number(factor),
         BinaryOperator::Mul,
         Expr::BinaryOp { left, op: inner, right })
            if matches!(inner, BinaryOperator::Add | BinaryOperator::Sub) =>
        {
            let first = simplify_binary(Expr::Number(factor), BinaryOperator::Mul, *left);
            let second =
                simplify_binary(Expr::Number(factor), BinaryOperator::Mul, *right);
            simplify_binary(first, inner, second)
        },
        (Expr::BinaryOp { left, op: inner, right },
         BinaryOperator::Mul,
         Expr::Number(factor))
            if matches!(inner, BinaryOperator::Add | BinaryOperator::Sub) =>
        {
            let first = simplify_binary(Expr::Number(factor), BinaryOperator::Mul, *left);
            let second =
                simplify_binary(Expr::Number(factor), BinaryOperator::Mul, *right);
            simplify_binary(first, inner, second)
        },
        (Expr::BinaryOp { left, op: inner, right },
         BinaryOperator::Div,
         Expr::Number(divisor))
            if matches!(inner, BinaryOperator::Add | BinaryOperator::Sub) =>
        {
            let first = simplify_binary(*left, BinaryOperator::Div, Expr::Number(divisor));
            let second =
                simplify_binary(*right, BinaryOperator::Div, Expr::Number(divisor));
            simplify_binary(first, inner, second)
        },
        (Expr::Number(outer),
         BinaryOperator::Mul,
         Expr::BinaryOp { left, op: BinaryOperator::Mul, right }) => {
            match *left {
                Expr::Number(inner) => {
                    simplify_binary(Expr::Number(outer * inner),
                                    BinaryOperator::Mul,
                                    *right)
                },
                left => mul(Expr::Number(outer), mul(left, *right)),
            }
        },
        (Expr::BinaryOp { left, op: BinaryOperator::Mul, right },
         BinaryOperator::Div,
         Expr::Number(divisor)) => {
            match *left {
                Expr::Number(inner) => {
                    simplify_binary(Expr::Number(inner / divisor),
                                    BinaryOperator::Mul,
                                    *right)
                },
                left => div(mul(left, *right), Expr::Number(divisor)),
            }
        },
        (left, BinaryOperator::Mul, Expr::Number(value)) => {
            simplify_binary(Expr::Number(value), BinaryOperator::Mul, left)
        },
        (left, op, right) => Expr::BinaryOp { left: Box::new(left),
                                              op,
                                              right: Box::new(right) },
    }
}

/// Reads the value out of a number node.
const fn number_of(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Number(value) => Some(*value),
        _ => None,
    }
}
