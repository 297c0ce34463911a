#[derive(Debug)]
/// Represents invariant violations that cannot occur for well-formed input.
///
/// The grammar and the solver's dispatch rules make these branches
/// structurally unreachable; each variant replaces what would otherwise be a
/// panic, so callers can still report the defect gracefully.
pub enum InternalError {
    /// A side that was reported to contain the variable turned out to be a
    /// plain number.
    VariableVanished,
    /// An equation node appeared below the root of the tree.
    NestedEquation,
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableVanished => write!(f,
                                             "Internal error: the variable vanished mid-rewrite. This is a bug in the solver, not in your input."),

            Self::NestedEquation => write!(f,
                                           "Internal error: a nested equation reached the solver. This is a bug in the parser, not in your input."),
        }
    }
}

impl std::error::Error for InternalError {}
