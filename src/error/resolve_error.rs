#[derive(Debug)]
/// Represents all errors that can occur while numerically resolving an
/// expression.
pub enum ResolveError {
    /// Tried to resolve the bound variable to a number.
    ResolvingVariable,
    /// Tried to resolve an equation to a number.
    ///
    /// Callers treat this as the signal to hand the tree to the solver
    /// instead.
    ResolvingEquation,
    /// Took the factorial of a value that is not a whole number.
    NonIntegerFactorial {
        /// The fractional operand.
        value: f64,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResolvingVariable => {
                write!(f, "A variable has no numeric value until it is solved for.")
            },

            Self::ResolvingEquation => write!(f,
                                              "An equation is not a number; solve it for its variable instead."),

            Self::NonIntegerFactorial { value } => write!(f,
                                                          "Factorial is only defined for whole numbers, but found {value}."),
        }
    }
}

impl std::error::Error for ResolveError {}
