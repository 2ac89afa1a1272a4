use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FnExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
            SymbolExpr,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Pratt loop. Starts on the first token of the expression and stops on its
/// last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        parser.record(Error::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Symbol(SymbolExpr {
        value: token.value.clone(),
        token,
    }))
}

/// Converts a digit run. A leading zero selects octal.
fn parse_integer_literal(text: &str) -> Option<i64> {
    if text.len() > 1 && text.starts_with('0') {
        i64::from_str_radix(&text[1..], 8).ok()
    } else {
        text.parse().ok()
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    let Some(value) = parse_integer_literal(&token.value) else {
        parser.record(Error::IntegerParseError { token: token.value });
        return None;
    };

    Some(Expr::Integer(IntegerExpr { token, value }))
}

pub fn parse_string_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::String(StringExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Some(Expr::Fn(FnExpr {
        token,
        parameters,
        body,
    }))
}

// fn(a, b, c): starts on `(`, stops on `)`
fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<SymbolExpr>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(SymbolExpr {
            value: token.value.clone(),
            token,
        });

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same power on the right keeps equal-rank operators left-associative
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Some(Expr::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}

/// Comma-separated expressions up to `end`. Starts on the opening token and
/// stops on `end`.
pub fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expr>> {
    let mut list = vec![];

    if parser.peek_token_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Some(list)
}
