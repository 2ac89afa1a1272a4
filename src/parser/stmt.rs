use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement. Starts on its first token and stops on its last
/// (the `;` when there is one).
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

// Stops on `;` or EOF. Whatever lies in between is not validated.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser.current_token_is(TokenKind::Semicolon) && !parser.current_token_is(TokenKind::EOF) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = SymbolExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);

    if value.is_none() {
        skip_to_semicolon(parser);
    } else if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);

    if value.is_none() {
        skip_to_semicolon(parser);
    } else if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // The semicolon is optional
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Starts on `{` and stops on the matching `}`, or on EOF when the block
/// is never closed.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = vec![];
    while !parser.current_token_is(TokenKind::CloseCurly) && !parser.current_token_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { token, body }
}
