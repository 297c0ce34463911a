use crate::error::{InternalError, ResolveError};

#[derive(Debug)]
/// Represents all errors that can occur while solving an equation.
pub enum SolveError {
    /// The input handed to the solver is not an equation.
    NotAnEquation,
    /// The equation contains no variable at all.
    WithoutVariable {
        /// Whether the two constant sides are numerically equal.
        equal: bool,
    },
    /// The variable is trapped inside a factorial, which has no inverse.
    VariableInFactorial,
    /// The equation's shape falls outside the supported inversion patterns.
    Unsupported {
        /// Which unsupported shape was encountered.
        shape: UnsupportedShape,
    },
    /// Resolving a constant side failed.
    Resolve(ResolveError),
    /// An invariant violation surfaced during solving.
    Internal(InternalError),
}

/// The enumerable equation shapes the solver recognizes but cannot invert.
///
/// Every variant is an explicit refusal; the solver never falls back to a
/// guessed or silently wrong answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnsupportedShape {
    /// The variable appears on both sides of the equation.
    VariableOnBothSides,
    /// The variable sits in an exponent; there is no logarithm support.
    VariableInExponent,
    /// The variable sits inside a modulo operation.
    VariableInModulus,
    /// Both additive operands carry the variable and cannot be merged into a
    /// single term.
    UnmergeableTerms,
    /// Both factors of a product carry the variable and cannot be merged.
    UnmergeableProduct,
    /// Dividend and divisor both carry the variable and cannot be merged.
    UnmergeableQuotient,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnEquation => {
                write!(f, "Nothing to solve: the input is not an equation.")
            },

            Self::WithoutVariable { equal: true } => write!(f,
                                                            "The equation has no variable to solve for; both sides are equal."),

            Self::WithoutVariable { equal: false } => write!(f,
                                                             "The equation has no variable to solve for, and its sides are not equal."),

            Self::VariableInFactorial => write!(f,
                                                "Cannot free the variable from a factorial: '!' has no inverse."),

            Self::Unsupported { shape } => {
                write!(f, "Solving this equation is not yet supported: {shape}.")
            },

            Self::Resolve(error) => write!(f, "{error}"),

            Self::Internal(error) => write!(f, "{error}"),
        }
    }
}

impl std::fmt::Display for UnsupportedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::VariableOnBothSides => "the variable appears on both sides",
            Self::VariableInExponent => "the variable is in an exponent",
            Self::VariableInModulus => "the variable is inside a modulo",
            Self::UnmergeableTerms => "terms with the variable cannot be merged",
            Self::UnmergeableProduct => "both factors carry the variable",
            Self::UnmergeableQuotient => "dividend and divisor both carry the variable",
        };
        write!(f, "{description}")
    }
}

impl std::error::Error for SolveError {}

impl From<ResolveError> for SolveError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}

impl From<InternalError> for SolveError {
    fn from(error: InternalError) -> Self {
        Self::Internal(error)
    }
}
