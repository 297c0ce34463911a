/// The evaluator module computes the numeric values of expression trees.
///
/// The evaluator walks an expression tree and produces every value it can
/// take, combining multi-possibility branches along the way. It is the
/// terminal stage for variable-free input.
///
/// # Responsibilities
/// - Resolves expression trees to lists of `f64` values.
/// - Combines multi-possibility operands pairwise.
/// - Reports unresolvable shapes such as a remaining variable or a whole
///   equation.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful element such as a number,
/// identifier, operator, or delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals, identifiers, operators, and delimiters.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an expression tree that represents the syntactic structure of the input.
/// This enables later phases to resolve, simplify, and solve it.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Validates precedence and delimiter matching, reporting errors on
///   malformed input.
/// - Binds the single allowed variable name and rejects any second one.
pub mod parser;
