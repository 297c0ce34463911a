use crate::interpreter::lexer::Token;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character in the input matches no recognized token class.
    IllegalCharacter {
        /// The offending character, as sliced from the input.
        character: String,
    },
    /// A number literal ended in a dot with no digits after it.
    NumberEndingInDot {
        /// The offending literal, including the trailing dot.
        literal: String,
    },
    /// A `.` with no digits on either side.
    LoneDot,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// Reached the end of input before the expression was complete.
    ExpectedMoreTokens {
        /// The closing token being looked for, when one is known.
        expected: Option<Token>,
    },
    /// A `(` without a matching `)`.
    UnmatchedParenthesis,
    /// A `|` without its closing bar.
    UnmatchedAbsolutePipe,
    /// A `{` without a matching `}`.
    UnmatchedBrace,
    /// Found extra tokens after parsing should have completed.
    TokensRemainingAfterParsing {
        /// The first unconsumed token.
        token: Token,
    },
    /// A second, different variable name appeared in the input.
    TooManyVariables {
        /// The name that bound the variable first.
        first:  String,
        /// The conflicting name.
        second: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character } => {
                write!(f, "Illegal character '{character}'.")
            },

            Self::NumberEndingInDot { literal } => {
                write!(f, "Number '{literal}' may not end in a dot.")
            },

            Self::LoneDot => write!(f, "A lone dot is not a number."),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token '{token}'."),

            Self::ExpectedMoreTokens { expected } => match expected {
                Some(token) => {
                    write!(f, "Ran out of input while looking for '{token}'.")
                },
                None => write!(f, "Ran out of input before the expression was complete."),
            },

            Self::UnmatchedParenthesis => {
                write!(f, "Unmatched opening parenthesis '('.")
            },

            Self::UnmatchedAbsolutePipe => {
                write!(f, "Unmatched absolute-value bar '|'.")
            },

            Self::UnmatchedBrace => write!(f, "Unmatched opening brace '{{'."),

            Self::TokensRemainingAfterParsing { token } => write!(f,
                                                                  "Extra input after a complete expression, starting at '{token}'."),

            Self::TooManyVariables { first, second } => write!(f,
                                                               "Only one variable is allowed, but found both '{first}' and '{second}'."),
        }
    }
}

impl std::error::Error for ParseError {}
