/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing input.
/// Parse errors cover both lexical mistakes (illegal characters, malformed
/// number literals) and syntactic ones (unexpected tokens, missing closers,
/// more than one variable).
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while numerically resolving an
/// expression tree, such as resolving a bare variable or taking the factorial
/// of a fractional value.
pub mod resolve_error;
/// Solving errors.
///
/// Contains the error types the solver reports when an equation cannot be
/// solved: missing variables, uninvertible operations, and equation shapes
/// outside the supported set. Wraps the evaluation and internal phases so a
/// solve failure always carries its origin.
pub mod solve_error;
/// Internal invariant violations.
///
/// Conditions that are structurally unreachable for well-formed input. If one
/// of these surfaces, it is a defect in this crate rather than a user error.
pub mod internal_error;

pub use internal_error::InternalError;
pub use parse_error::ParseError;
pub use resolve_error::ResolveError;
pub use solve_error::{SolveError, UnsupportedShape};
