use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A diagnostic recorded by the parser.
///
/// None of these stop a parse. They are collected in order and handed back
/// next to the (possibly incomplete) program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnexpectedToken { .. } => "UnexpectedToken",
            Error::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            Error::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            // The message already names both tokens
            Error::UnexpectedToken { .. } => ErrorTip::None,
            Error::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            } => ErrorTip::Suggestion(String::from(
                "Unrecognised character in source",
            )),
            Error::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            Error::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
