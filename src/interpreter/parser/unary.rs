use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator, neg},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_exponent, core::ParseResult},
    },
};

/// Parses prefix operators.
///
/// Handles the unary minus, which may be chained (`--x` negates twice), and
/// the prefix `±`, which wraps its operand in a
/// [`Expr::MultiPossibility`] holding the operand and its negation.
///
/// The rule is: `unary := "-" unary | "±" unary | power`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The parsed expression, wrapped in negations for each leading minus.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                          variable: &mut Option<String>)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens, variable)?;
        return Ok(neg(operand));
    }
    if let Some(Token::PlusMinus) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens, variable)?;
        return Ok(Expr::MultiPossibility(vec![operand.clone(), neg(operand)]));
    }
    parse_exponent(tokens, variable)
}

/// Parses an optional postfix factorial.
///
/// A single trailing `!` wraps the primary expression in a factorial node.
/// The factorial does not chain; `3!!` leaves the second `!` unconsumed,
/// which the caller then reports as a leftover token.
///
/// The rule is: `factor := primary "!"?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The primary expression, possibly wrapped in a factorial.
pub fn parse_factorial<'a, I>(tokens: &mut Peekable<I>,
                              variable: &mut Option<String>)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let operand = parse_primary(tokens, variable)?;
    if let Some(Token::Bang) = tokens.peek() {
        tokens.next();
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Factorial,
                                  expr: Box::new(operand), });
    }
    Ok(operand)
}

/// Parses the atoms of the grammar.
///
/// A primary expression is a number literal, a parenthesized expression, an
/// absolute-value group, a brace-delimited list of possibilities, or a
/// variable identifier.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The parsed atom.
///
/// # Errors
/// [`ParseError::ExpectedMoreTokens`] when the input ends where an atom was
/// required, and [`ParseError::UnexpectedToken`] when the next token cannot
/// begin one.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                            variable: &mut Option<String>)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek() else {
        return Err(ParseError::ExpectedMoreTokens { expected: None });
    };
    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number(value))
        },
        Token::LParen => parse_grouping(tokens, variable),
        Token::Pipe => parse_absolute_value(tokens, variable),
        Token::LBrace => parse_possibilities(tokens, variable),
        Token::Identifier(_) => parse_identifier(tokens, variable),
        token => Err(ParseError::UnexpectedToken { token: (*token).clone() }),
    }
}

/// Parses a parenthesized expression.
///
/// Consumes the opening `(`, the grouped expression, and the closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead, positioned on `(`.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The inner expression. Grouping leaves no node of its own; precedence
/// comes from tree shape.
///
/// # Errors
/// [`ParseError::ExpectedMoreTokens`] when the input ends before `)`, and
/// [`ParseError::UnmatchedParenthesis`] when something else appears where
/// `)` should be.
pub fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                             variable: &mut Option<String>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = super::core::parse_expression(tokens, variable)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        Some(_) => Err(ParseError::UnmatchedParenthesis),
        None => Err(ParseError::ExpectedMoreTokens { expected: Some(Token::RParen) }),
    }
}

/// Parses an absolute-value group.
///
/// Consumes the opening `|`, the grouped expression, and the closing `|`,
/// producing a [`UnaryOperator::AbsoluteValue`] node. A `|` in operand
/// position always opens a new group, so the bars nest: `||x| - 2|` takes
/// the outer absolute value of `|x| - 2`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead, positioned on `|`.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// The absolute value of the inner expression.
///
/// # Errors
/// [`ParseError::ExpectedMoreTokens`] when the input ends before the closing
/// `|`, and [`ParseError::UnmatchedAbsolutePipe`] when something else
/// appears in its place.
pub fn parse_absolute_value<'a, I>(tokens: &mut Peekable<I>,
                                   variable: &mut Option<String>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = super::core::parse_expression(tokens, variable)?;
    match tokens.next() {
        Some(Token::Pipe) => Ok(Expr::UnaryOp { op:   UnaryOperator::AbsoluteValue,
                                                expr: Box::new(expr), }),
        Some(_) => Err(ParseError::UnmatchedAbsolutePipe),
        None => Err(ParseError::ExpectedMoreTokens { expected: Some(Token::Pipe) }),
    }
}

/// Parses a brace-delimited list of possibilities.
///
/// Consumes the opening `{`, one or more comma-separated expressions, and
/// the closing `}`, producing a [`Expr::MultiPossibility`] whose branches
/// appear in source order.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead, positioned on `{`.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// A multi-possibility over the listed expressions.
///
/// # Errors
/// [`ParseError::ExpectedMoreTokens`] when the input ends before `}`, and
/// [`ParseError::UnmatchedBrace`] when something other than `,` or `}`
/// follows a branch.
pub fn parse_possibilities<'a, I>(tokens: &mut Peekable<I>,
                                  variable: &mut Option<String>)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let mut branches = vec![super::core::parse_expression(tokens, variable)?];
    loop {
        match tokens.next() {
            Some(Token::Comma) => {
                branches.push(super::core::parse_expression(tokens, variable)?);
            },
            Some(Token::RBrace) => return Ok(Expr::MultiPossibility(branches)),
            Some(_) => return Err(ParseError::UnmatchedBrace),
            None => {
                return Err(ParseError::ExpectedMoreTokens { expected:
                                                                Some(Token::RBrace) })
            },
        }
    }
}

/// Parses a variable identifier.
///
/// The first identifier in the input binds the variable name; every later
/// occurrence must match it. All occurrences produce the same
/// [`Expr::Variable`] node, since a single input names at most one unknown.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead, positioned on an identifier.
/// - `variable`: The bound-variable slot threaded through the whole parse.
///
/// # Returns
/// [`Expr::Variable`].
///
/// # Errors
/// [`ParseError::TooManyVariables`] when the identifier differs from the one
/// already bound.
pub fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                               variable: &mut Option<String>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(Token::Identifier(name)) = tokens.next() else {
        return Err(ParseError::ExpectedMoreTokens { expected: None });
    };
    match variable {
        None => {
            *variable = Some(name.clone());
            Ok(Expr::Variable)
        },
        Some(bound) if *bound == *name => Ok(Expr::Variable),
        Some(bound) => Err(ParseError::TooManyVariables { first:  bound.clone(),
                                                          second: name.clone(), }),
    }
}
