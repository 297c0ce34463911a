use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, add, sub},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_factorial, parse_unary},
        },
    },
};

/// Parses addition-level expressions.
///
/// Handles the left-associative binary operators `+` and `-`, plus the
/// multi-value marker `±`: `a ± b` builds a
/// [`Expr::MultiPossibility`] holding both `a + b` and `a - b`, in that
/// order.
///
/// The rule is: `expr := term (("+" | "-" | "±") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// An expression tree combining term-level nodes.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             variable: &mut Option<String>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, variable)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, variable)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        if let Some(Token::PlusMinus) = tokens.peek() {
            tokens.next();
            let right = parse_multiplicative(tokens, variable)?;
            left = Expr::MultiPossibility(vec![add(left.clone(), right.clone()),
                                               sub(left, right)]);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/`, and `%`.
///
/// The rule is: `term := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   variable: &mut Option<String>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, variable)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens, variable)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Handles repeated exponentiation with right-associativity:
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `power := factor ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             variable: &mut Option<String>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_factorial(tokens, variable)?;
    if let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let exponent = parse_exponent(tokens, variable)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `^`). Returns `None` for all other tokens,
/// including `±`, which builds a multi-possibility rather than a plain
/// binary node.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use isola::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
