use crate::{ast::ast::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence ranks, weakest first. The derived ordering is what the Pratt
/// loop compares.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Option<Expr>;

/// Binding power of a token kind in infix position. Kinds that cannot
/// continue an expression are `Lowest`, which ends the Pratt loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Asterisk | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// Handler for a token that starts an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        TokenKind::Identifier => parse_symbol_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::String => parse_string_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,
        TokenKind::Bang | TokenKind::Minus => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Function => parse_fn_expr,
        _ => return None,
    };

    Some(handler)
}

/// Handler for a token that continues an expression. Every kind with a
/// handler here has a binding power above `Lowest`.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => parse_binary_expr,
        TokenKind::OpenParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}
