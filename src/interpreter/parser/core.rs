use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of a successful parse.
///
/// Besides the expression tree itself, parsing records the name of the bound
/// variable when the input mentioned one. The tree's
/// [`Variable`](Expr::Variable) nodes carry no payload; this is the single
/// place the name lives.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The parsed expression or equation.
    pub expr:     Expr,
    /// The name of the bound variable, if the input mentioned one.
    pub variable: Option<String>,
}

/// Parses a full input line into an expression or equation.
///
/// This is the entry point for parsing. It tokenizes the source, parses one
/// top-level expression (optionally an equation), and requires that nothing
/// is left over afterwards.
///
/// Grammar: `top := expr ('=' expr)?`
///
/// # Parameters
/// - `source`: The raw input text.
///
/// # Returns
/// The parsed tree together with the bound variable name, if any.
///
/// # Errors
/// - Any lexical error from [`tokenize`].
/// - Any syntactic error from the grammar rules.
/// - `TokensRemainingAfterParsing` if input remains after a complete parse,
///   including a second `=`.
///
/// # Example
/// ```
/// use isola::interpreter::parser::core::parse;
///
/// let parsed = parse("2 * n + 3 = 11").unwrap();
/// assert_eq!(parsed.variable.as_deref(), Some("n"));
/// assert_eq!(parsed.expr.to_string(), "(2 * x) + 3 = 11");
/// ```
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let mut variable = None;

    let expr = parse_equation(&mut iter, &mut variable)?;

    if let Some(token) = iter.next() {
        return Err(ParseError::TokensRemainingAfterParsing { token: token.clone() });
    }

    Ok(Parsed { expr, variable })
}

/// Parses the top-level rule: an expression, optionally equated to a second
/// expression.
///
/// An `=` may appear at most once. A second `=` is left unconsumed here and
/// rejected by [`parse`] as trailing input.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The parsed expression, or an [`Expr::Equation`] when an `=` was present.
pub fn parse_equation<'a, I>(tokens: &mut Peekable<I>,
                             variable: &mut Option<String>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_expression(tokens, variable)?;

    if let Some(Token::Equals) = tokens.peek() {
        tokens.next();
        let right = parse_expression(tokens, variable)?;
        return Ok(Expr::Equation { left:  Box::new(left),
                                   right: Box::new(right), });
    }

    Ok(left)
}

/// Parses a full expression.
///
/// This begins at the lowest-precedence level, the additive one, and
/// recursively descends through the precedence hierarchy.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               variable: &mut Option<String>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens, variable)
}
