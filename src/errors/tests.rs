//! Unit tests for error handling.
//!
//! This module contains tests for error messages and error reporting.

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = Error::UnexpectedToken {
        expected: TokenKind::Assign,
        found: TokenKind::Int,
    };

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::NoPrefixParseFn {
        kind: TokenKind::Semicolon,
    };

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::IntegerParseError {
        token: "99999999999999999999".to_string(),
    };

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tips() {
    let illegal = Error::NoPrefixParseFn {
        kind: TokenKind::Illegal,
    };
    let keyword = Error::NoPrefixParseFn {
        kind: TokenKind::Else,
    };

    assert_eq!(illegal.get_tip().to_string(), "Unrecognised character in source");
    assert_eq!(keyword.get_tip().to_string(), "`ELSE` cannot start an expression");
    assert!(matches!(illegal.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_unexpected_token_has_no_tip() {
    let error = Error::UnexpectedToken {
        expected: TokenKind::CloseParen,
        found: TokenKind::EOF,
    };

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}
