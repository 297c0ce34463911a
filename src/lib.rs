//! # isola
//!
//! isola is a single-variable equation calculator written in Rust.
//! It parses, evaluates, and simplifies arithmetic expressions, and isolates
//! the unknown of an equation step by step, with support for multi-valued
//! expressions, absolute values, factorials, and more.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]

use crate::{
    algebra::solver::solve,
    error::ResolveError,
    interpreter::{evaluator::resolve, parser::core::parse},
};

/// Rewrites and solves equations.
///
/// This module holds everything that works on an expression tree after
/// parsing: the simplifier that shrinks trees, the term extractors that
/// recognize monomials, and the solver that isolates the variable of an
/// equation.
///
/// # Responsibilities
/// - Simplifies expression trees without changing their values.
/// - Recognizes and rebuilds `coefficient * variable^degree` terms.
/// - Solves single-variable equations, recording each step.
pub mod algebra;
/// Defines the structure of parsed input.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an input line as a tree. The tree is built by
/// the parser and traversed by the evaluator, simplifier, and solver.
///
/// # Responsibilities
/// - Defines expression nodes for all supported constructs.
/// - Provides constructors for building trees in code.
/// - Renders trees back to infix text.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// resolving, or solving. It standardizes error reporting and carries
/// detailed information about failures, one enum per phase, so callers can
/// dispatch on where a failure happened.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   solver).
/// - Attaches the offending token, literal, or value where one exists.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates reading input into values.
///
/// This module ties together lexing, parsing, and numeric resolution to turn
/// a source line into an expression tree and, when possible, into the values
/// that tree takes.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Provides entry points for parsing and resolving user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Everything the pipeline produced for one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The numeric value(s) of the input.
    pub values:   Vec<f64>,
    /// The rendered equation after each solving transformation, empty for
    /// inputs that needed no solving.
    pub steps:    Vec<String>,
    /// The variable name the input bound, if any.
    pub variable: Option<String>,
}

/// Returns the final numeric answer for one input line.
///
/// This function parses the line and resolves it to its value(s). When the
/// line is an equation, it first solves for the variable and resolves what
/// the variable equals, returning the solving steps alongside the values.
///
/// # Errors
/// Returns an error if lexing, parsing, solving, or resolution fails, with
/// the phase-specific error describing the failure.
///
/// # Examples
/// ```
/// use isola::answer;
///
/// let plain = answer("2 + 2")?;
/// assert_eq!(plain.values, vec![4.0]);
///
/// let solved = answer("2 * n + 3 = 11")?;
/// assert_eq!(solved.values, vec![4.0]);
/// assert_eq!(solved.variable.as_deref(), Some("n"));
///
/// // An expression with an unknown but no `=` cannot be answered.
/// assert!(answer("n + 1").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn answer(source: &str) -> Result<Answer, Box<dyn std::error::Error>> {
    let parsed = parse(source)?;
    match resolve(&parsed.expr) {
        Ok(values) => Ok(Answer { values,
                                  steps: Vec::new(),
                                  variable: parsed.variable, }),
        Err(ResolveError::ResolvingEquation) => {
            let solution = solve(parsed.expr)?;
            let values = resolve(&solution.result)?;
            Ok(Answer { values,
                        steps: solution.steps,
                        variable: parsed.variable, })
        },
        Err(error) => Err(Box::new(error)),
    }
}
