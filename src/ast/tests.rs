//! Unit tests for AST serialization.

use crate::{lexer::tokens::TokenKind, MK_TOKEN};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{
        BooleanExpr, CallExpr, FnExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn symbol(name: &str) -> SymbolExpr {
    SymbolExpr {
        token: MK_TOKEN!(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn integer(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    })
}

fn block(body: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: MK_TOKEN!(TokenKind::OpenCurly, "{"),
        body,
    }
}

fn expression_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: MK_TOKEN!(TokenKind::Identifier, expression.token_literal()),
        expression,
    })
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: MK_TOKEN!(TokenKind::Let, "let"),
            name: symbol("myVar"),
            value: Some(Expr::Symbol(symbol("anotherVar"))),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_absent_values_render_empty() {
    let let_stmt = LetStmt {
        token: MK_TOKEN!(TokenKind::Let, "let"),
        name: symbol("x"),
        value: None,
    };
    let return_stmt = ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: None,
    };

    assert_eq!(let_stmt.to_string(), "let x = ;");
    assert_eq!(return_stmt.to_string(), "return ;");
}

#[test]
fn test_operator_expressions_are_parenthesized() {
    let negated = Expr::Prefix(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Minus, "-"),
        operator: "-".to_string(),
        right: Box::new(integer(1)),
    });
    let product = Expr::Infix(InfixExpr {
        token: MK_TOKEN!(TokenKind::Asterisk, "*"),
        left: Box::new(negated),
        operator: "*".to_string(),
        right: Box::new(integer(2)),
    });

    assert_eq!(product.to_string(), "((-1) * 2)");
    assert_eq!(product.token_literal(), "*");
}

#[test]
fn test_if_expression_string() {
    let condition = Expr::Infix(InfixExpr {
        token: MK_TOKEN!(TokenKind::Less, "<"),
        left: Box::new(Expr::Symbol(symbol("x"))),
        operator: "<".to_string(),
        right: Box::new(Expr::Symbol(symbol("y"))),
    });
    let mut expr = IfExpr {
        token: MK_TOKEN!(TokenKind::If, "if"),
        condition: Box::new(condition),
        consequence: block(vec![expression_stmt(Expr::Symbol(symbol("x")))]),
        alternative: None,
    };

    assert_eq!(expr.to_string(), "if(x < y) x");

    expr.alternative = Some(block(vec![expression_stmt(Expr::Symbol(symbol("y")))]));
    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_function_and_call_string() {
    let function = FnExpr {
        token: MK_TOKEN!(TokenKind::Function, "fn"),
        parameters: vec![symbol("x"), symbol("y")],
        body: block(vec![expression_stmt(Expr::Boolean(BooleanExpr {
            token: MK_TOKEN!(TokenKind::True, "true"),
            value: true,
        }))]),
    };
    let call = CallExpr {
        token: MK_TOKEN!(TokenKind::OpenParen, "("),
        function: Box::new(Expr::Fn(function.clone())),
        arguments: vec![integer(1), integer(2)],
    };

    assert_eq!(function.to_string(), "fn(x, y) true");
    assert_eq!(call.to_string(), "fn(x, y) true(1, 2)");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}
