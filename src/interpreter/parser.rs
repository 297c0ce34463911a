/// Entry points and equation handling.
///
/// Contains the top-level [`core::parse`] function, the [`core::Parsed`]
/// output pair, and the rule that splits an equation on `=`.
pub mod core;

/// Addition, multiplication, and exponentiation levels.
///
/// Implements the left-associative `+`, `-`, `±`, `*`, `/`, and `%` rules,
/// the right-associative `^` rule, and the token-to-operator mapping.
pub mod binary;

/// Prefix operators, postfix factorial, and atoms.
///
/// Handles unary minus and `±`, the optional trailing `!`, and the primary
/// forms: number literals, groupings, absolute values, possibility lists,
/// and the variable identifier.
pub mod unary;
