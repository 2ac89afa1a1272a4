//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser keeps exactly one token of lookahead: `current` is the token
//! being parsed and `peek` the one after it. Expression parsing lives in
//! `expr`, statement parsing in `stmt`, and the NUD/LED dispatch and
//! binding powers in `lookups`.

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Diagnostics are appended to `errors` as they are found; parsing always
/// continues.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Reads two tokens so that both `current` and `peek` are set.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into `current` and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances when the lookahead is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an
    /// `UnexpectedToken` diagnostic. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Option<Token> {
        if self.peek_token_is(expected) {
            self.advance();
            Some(self.current.clone())
        } else {
            self.record(Error::UnexpectedToken {
                expected,
                found: self.peek.kind,
            });
            None
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until end of input.
    ///
    /// A statement that fails to parse is left out; its diagnostic is
    /// already in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        Program { statements }
    }
}

/// Parses a complete source string.
///
/// This is the main entry point for parsing. It builds a lexer and a parser
/// for `source`, parses every statement, and hands back the program
/// together with the diagnostics. Check the diagnostics before trusting
/// the program.
pub fn parse(source: impl Into<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
