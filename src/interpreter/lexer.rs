use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14` or `.5`.
    ///
    /// A literal may not end in a dot, and a bare dot is not a literal;
    /// both patterns are matched so they can be rejected with a precise
    /// error instead of a generic illegal character.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.", number_ending_in_dot)]
    #[token(".", lone_dot)]
    Number(f64),
    /// Identifier tokens, such as `x`. There are no reserved words; any
    /// identifier is a candidate variable name.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `±`
    #[token("±")]
    PlusMinus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `|`
    #[token("|")]
    Pipe,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
}

/// Classifies why the lexer rejected a piece of input.
///
/// `tokenize` turns these into the richer [`ParseError`] variants, attaching
/// the offending slice of text.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that matches no token class.
    #[default]
    IllegalCharacter,
    /// A number literal with a trailing dot, such as `3.`.
    NumberEndingInDot,
    /// A `.` with no digits on either side.
    LoneDot,
}

/// Parses a numeric literal from the current token slice.
///
/// A literal starting with a dot (such as `.5`) parses as if prefixed with
/// `0`.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Rejects a numeric literal ending in a dot, such as `3.`.
fn number_ending_in_dot(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::NumberEndingInDot)
}
/// Rejects a dot with no digits on either side.
fn lone_dot(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::LoneDot)
}

/// Converts raw input text into a flat sequence of tokens.
///
/// Whitespace is skipped. Lexing is all-or-nothing: the first rejected piece
/// of input aborts the scan with an error describing it.
///
/// # Parameters
/// - `input`: The raw source text.
///
/// # Returns
/// All tokens of the input, in order.
///
/// # Errors
/// - `IllegalCharacter` for input matching no token class.
/// - `NumberEndingInDot` for literals such as `3.`.
/// - `LoneDot` for a bare `.`.
///
/// # Example
/// ```
/// use isola::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Plus,
///                 Token::Identifier("x".to_string())]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(error) => {
                let slice = lexer.slice().to_string();
                return Err(match error {
                    LexError::IllegalCharacter => {
                        ParseError::IllegalCharacter { character: slice }
                    },
                    LexError::NumberEndingInDot => {
                        ParseError::NumberEndingInDot { literal: slice }
                    },
                    LexError::LoneDot => ParseError::LoneDot,
                });
            },
        }
    }

    Ok(tokens)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::PlusMinus => write!(f, "±"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Percent => write!(f, "%"),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Pipe => write!(f, "|"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
        }
    }
}
