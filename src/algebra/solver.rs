use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::{
    algebra::{
        simplifier::simplify,
        terms::{coefficient_and_degree, monomial},
    },
    ast::{BinaryOperator, Expr, UnaryOperator, add, div, mul, neg, pow, sub},
    error::{InternalError, SolveError, UnsupportedShape},
    interpreter::evaluator::resolve,
};

/// The result alias used by every solving routine.
pub type SolveResult<T> = Result<T, SolveError>;

/// A solved equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// What the variable equals, simplified. Resolving it yields the numeric
    /// value(s).
    pub result: Expr,
    /// The textual form of the equation after each transformation, starting
    /// from its simplified original shape.
    pub steps:  Vec<String>,
}

/// Isolates the variable of an equation.
///
/// The solver repeatedly strips the outermost operation from the side
/// holding the variable and applies its inverse to the other side, until
/// the variable stands alone. The returned [`Solution`] carries the
/// expression the variable equals along with one rendered equation per
/// transformation, so a caller can show the working or ignore it.
///
/// # Parameters
/// - `equation`: The [`Expr::Equation`] to solve.
///
/// # Returns
/// The solution, whose result resolves to the variable's value(s).
///
/// # Errors
/// [`SolveError::NotAnEquation`] when the argument is not an equation,
/// [`SolveError::WithoutVariable`] when neither side contains the variable,
/// [`SolveError::VariableInFactorial`] when the variable is trapped inside a
/// factorial, and [`SolveError::Unsupported`] for every equation shape with
/// no implemented inverse.
///
/// # Example
/// ```
/// use isola::{algebra::solver::solve, interpreter::parser::core::parse};
///
/// let parsed = parse("2 * x + 3 = 11")?;
/// let solution = solve(parsed.expr)?;
///
/// assert_eq!(solution.result.to_string(), "4");
/// assert_eq!(solution.steps,
///            vec!["(2 * x) + 3 = 11", "2 * x = 8", "x = 4"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve(equation: Expr) -> SolveResult<Solution> {
    let Expr::Equation { left, right } = equation else {
        return Err(SolveError::NotAnEquation);
    };
    let mut steps = Vec::new();
    let result = isolate(*left, *right, &mut steps)?;
    Ok(Solution { result, steps })
}

/// One pass of the isolation loop.
///
/// Simplifies and reorders both sides, records the equation as a step, and
/// either terminates on a shortcut or strips one operation from the side
/// holding the variable. Every recursion passes the variable-bearing side
/// as `left`, so from the second step on the rendered equations keep the
/// variable on the left.
fn isolate(left: Expr, right: Expr, steps: &mut Vec<String>) -> SolveResult<Expr> {
    let left = simplify(left);
    let right = simplify(right);
    if !left.contains_variable() && !right.contains_variable() {
        let equal = resolve(&left)? == resolve(&right)?;
        return Err(SolveError::WithoutVariable { equal });
    }
    let left = reorder_terms(left);
    let right = reorder_terms(right);
    steps.push(format!("{left} = {right}"));
    match (left, right) {
        (Expr::UnaryOp { op: left_op, expr: left_inner },
         Expr::UnaryOp { op: right_op, expr: right_inner }) if left_op == right_op => {
            isolate(*left_inner, *right_inner, steps)
        },
        (Expr::BinaryOp { left: a, op: left_op, right: b },
         Expr::BinaryOp { left: c, op: right_op, right: d })
            if left_op == right_op && (a == c || b == d) =>
        {
            if a == c {
                isolate(*b, *d, steps)
            } else {
                isolate(*a, *c, steps)
            }
        },
        (left, right) => {
            if left.contains_variable() && right.contains_variable() {
                return Err(SolveError::Unsupported { shape:
                                                         UnsupportedShape::VariableOnBothSides });
            }
            if left.contains_variable() {
                invert(left, right, steps)
            } else {
                invert(right, left, steps)
            }
        },
    }
}

/// Strips the outermost operation from the variable-bearing side.
fn invert(variable_side: Expr,
          other_side: Expr,
          steps: &mut Vec<String>)
          -> SolveResult<Expr> {
    match variable_side {
        Expr::Variable => Ok(other_side),
        Expr::Number(_) => Err(SolveError::Internal(InternalError::VariableVanished)),
        Expr::Equation { .. } => Err(SolveError::Internal(InternalError::NestedEquation)),
        Expr::UnaryOp { op, expr } => match op {
            UnaryOperator::Negation => isolate(*expr, neg(other_side), steps),
            UnaryOperator::AbsoluteValue => {
                let negated = neg(other_side.clone());
                isolate(*expr,
                        Expr::MultiPossibility(vec![other_side, negated]),
                        steps)
            },
            UnaryOperator::Factorial => Err(SolveError::VariableInFactorial),
        },
        Expr::BinaryOp { left, op, right } => {
            invert_binary(*left, op, *right, other_side, steps)
        },
        Expr::MultiPossibility(branches) => {
            let mut results = Vec::with_capacity(branches.len());
            for branch in branches {
                results.push(isolate(branch, other_side.clone(), steps)?);
            }
            Ok(simplify(Expr::MultiPossibility(results)))
        },
    }
}

/// Inverts one binary operation on the variable-bearing side.
///
/// `a op b = other` becomes a new equation with one operand moved across,
/// except when both operands carry the variable, in which case the two are
/// merged into a single monomial first or reported as unsupported.
fn invert_binary(a: Expr,
                 op: BinaryOperator,
                 b: Expr,
                 other: Expr,
                 steps: &mut Vec<String>)
                 -> SolveResult<Expr> {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub
            if a.contains_variable() && b.contains_variable() =>
        {
            match merged_sum(&a, op, &b) {
                Some(merged) => isolate(merged, other, steps),
                None => Err(SolveError::Unsupported { shape:
                                                          UnsupportedShape::UnmergeableTerms }),
            }
        },
        BinaryOperator::Add => {
            if a.contains_variable() {
                isolate(a, sub(other, b), steps)
            } else {
                isolate(b, sub(other, a), steps)
            }
        },
        BinaryOperator::Sub => {
            if a.contains_variable() {
                isolate(a, add(other, b), steps)
            } else {
                isolate(b, sub(a, other), steps)
            }
        },
        BinaryOperator::Mul if a.contains_variable() && b.contains_variable() => {
            match merged_product(&a, &b) {
                Some(merged) => isolate(merged, other, steps),
                None => Err(SolveError::Unsupported { shape:
                                                          UnsupportedShape::UnmergeableProduct }),
            }
        },
        BinaryOperator::Mul => {
            if a.contains_variable() {
                isolate(a, div(other, b), steps)
            } else {
                isolate(b, div(other, a), steps)
            }
        },
        BinaryOperator::Div if a.contains_variable() && b.contains_variable() => {
            match merged_quotient(&a, &b) {
                Some(merged) => isolate(merged, other, steps),
                None => Err(SolveError::Unsupported { shape:
                                                          UnsupportedShape::UnmergeableQuotient }),
            }
        },
        BinaryOperator::Div => {
            if a.contains_variable() {
                isolate(a, mul(other, b), steps)
            } else {
                // The divisor holds the variable, so dividing through by the
                // other side swaps it into dividend position.
                let quotient = div(a, other);
                steps.push(format!("{quotient} = {b}"));
                isolate(b, quotient, steps)
            }
        },
        BinaryOperator::Pow => {
            if b.contains_variable() {
                return Err(SolveError::Unsupported { shape:
                                                         UnsupportedShape::VariableInExponent });
            }
            isolate(a, pow(other, div(Expr::Number(1.0), b)), steps)
        },
        BinaryOperator::Mod => {
            Err(SolveError::Unsupported { shape: UnsupportedShape::VariableInModulus })
        },
    }
}

/// Merges two variable-bearing additive operands into one monomial.
fn merged_sum(a: &Expr, op: BinaryOperator, b: &Expr) -> Option<Expr> {
    let (left_coefficient, left_degree) = coefficient_and_degree(a)?;
    let (right_coefficient, right_degree) = coefficient_and_degree(b)?;
    if left_degree != right_degree {
        return None;
    }
    let combined = match op {
        BinaryOperator::Add => left_coefficient + right_coefficient,
        _ => left_coefficient - right_coefficient,
    };
    Some(simplify(monomial(combined, left_degree)))
}

/// Merges two variable-bearing factors by adding degrees.
fn merged_product(a: &Expr, b: &Expr) -> Option<Expr> {
    let (left_coefficient, left_degree) = coefficient_and_degree(a)?;
    let (right_coefficient, right_degree) = coefficient_and_degree(b)?;
    Some(simplify(monomial(left_coefficient * right_coefficient,
                           left_degree + right_degree)))
}

/// Merges a variable-bearing dividend and divisor by subtracting degrees.
fn merged_quotient(a: &Expr, b: &Expr) -> Option<Expr> {
    let (left_coefficient, left_degree) = coefficient_and_degree(a)?;
    let (right_coefficient, right_degree) = coefficient_and_degree(b)?;
    Some(simplify(monomial(left_coefficient / right_coefficient,
                           left_degree - right_degree)))
}

/// Reorders an additive chain by descending degree.
///
/// Flattens a `+`/`-` chain into its terms, sorts recognized monomials
/// before unrecognized terms and by descending degree among themselves, and
/// rebuilds a right-leaning sum. Terms the sort cannot rank keep their
/// relative order. Any other root shape passes through untouched.
fn reorder_terms(expr: Expr) -> Expr {
    if !matches!(expr,
                 Expr::BinaryOp { op: BinaryOperator::Add | BinaryOperator::Sub, .. })
    {
        return expr;
    }
    let mut terms = Vec::new();
    collect_terms(expr, false, &mut terms);
    terms.sort_by_key(|term| {
             coefficient_and_degree(term).map_or((1, Reverse(OrderedFloat(0.0))),
                                                 |(_, degree)| {
                                                     (0, Reverse(OrderedFloat(degree)))
                                                 })
         });
    let mut terms = terms.into_iter().rev();
    let Some(seed) = terms.next() else {
        return Expr::Number(0.0);
    };
    terms.fold(seed, |sum, term| add(term, sum))
}

/// Flattens a `+`/`-` chain into a list of additive terms.
///
/// Subtraction contributes its right operand wrapped in a negation, so the
/// rebuilt chain is a pure sum.
fn collect_terms(expr: Expr, negated: bool, terms: &mut Vec<Expr>) {
    match expr {
        Expr::BinaryOp { left, op: BinaryOperator::Add, right } => {
            collect_terms(*left, negated, terms);
            collect_terms(*right, negated, terms);
        },
        Expr::BinaryOp { left, op: BinaryOperator::Sub, right } => {
            collect_terms(*left, negated, terms);
            collect_terms(*right, !negated, terms);
        },
        expr => terms.push(if negated { neg(expr) } else { expr }),
    }
}
