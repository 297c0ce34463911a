/// The simplifier module rewrites expression trees into smaller ones.
///
/// The simplifier folds constants, applies arithmetic identities, merges
/// like terms, and distributes constant factors, without ever failing. The
/// solver runs it before every isolation step so that shapes it knows how
/// to invert actually appear.
///
/// # Responsibilities
/// - Folds constant subtrees into single numbers.
/// - Cancels identity operands and double negations.
/// - Merges like terms and normalizes products toward constant-first form.
pub mod simplifier;

/// The solver module isolates the variable of an equation.
///
/// The solver repeatedly peels the outermost operation off the side holding
/// the variable, applying its inverse to the other side, until the variable
/// stands alone. Each intermediate equation is recorded as a rendered step.
///
/// # Responsibilities
/// - Splits an equation into a variable side and a constant side.
/// - Applies inverse operations and branches on multi-valued ones.
/// - Reports equation shapes it cannot invert as explicit errors.
pub mod solver;

/// The terms module reads and builds monomials.
///
/// A monomial is a constant multiple of a power of the variable. The
/// extractors here recognize the handful of tree shapes that denote one,
/// and the builder produces the canonical shape back, which is what lets
/// the simplifier merge like terms and the solver order them.
pub mod terms;
