//! Integration tests for the public front-end API.
//!
//! These tests run complete programs through tokenization and parsing
//! and check the serialized tree and the diagnostics.

use mscript::{
    ast::ast::{Expr, Node, Stmt},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parse,
    parser::parser::Parser,
};

#[test]
fn test_parse_complete_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        let greeting = "hello";

        if (result > 10) {
            return true;
        } else {
            return !false;
        }
    "#;

    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.len(), 6);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(
        program.to_string(),
        "let five = 5;let ten = 10;let add = fn(x, y) (x + y);let result = add(five, ten);\
         let greeting = hello;if(result > 10) return true;else return (!false);"
    );
}

#[test]
fn test_higher_order_functions() {
    let source = "let twice = fn(f, x) { f(f(x)) }; twice(fn(n) { n * 2 }, 3 - -1);";
    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.len(), 2);

    let Stmt::Expression(stmt) = &program.statements[1] else {
        panic!("expected expression statement");
    };
    let Expr::Call(call) = &stmt.expression else {
        panic!("expected call expression");
    };
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(call.arguments[0].to_string(), "fn(n) (n * 2)");
    assert_eq!(call.arguments[1].to_string(), "(3 - (-1))");
}

#[test]
fn test_errors_do_not_stop_parsing() {
    let source = "let x 5; let = 3; let y = 7; y";
    let (program, errors) = parse(source);

    assert_eq!(
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
        ]
    );
    assert_eq!(program.to_string(), "53let y = 7;y");
}

#[test]
fn test_parser_matches_tokenize() {
    let source = "if (a == b) { c(1, \"two\") } else { !d }";
    let tokens = tokenize(source);

    let mut lexer = Lexer::new(source);
    for token in &tokens {
        assert_eq!(&lexer.next_token(), token);
    }
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "if(a == b) c(1, two)else (!d)");
}

#[test]
fn test_garbage_input_never_panics() {
    let inputs = [
        "",
        ";;;;",
        "))))",
        "let",
        "let x =",
        "return",
        "if",
        "if (",
        "fn(",
        "fn(a,",
        "add(1,",
        "\"unterminated",
        "{ { {",
        "} } }",
        "@#$%^&",
        "let let let = = =",
        "else else",
    ];

    for input in inputs {
        let (program, errors) = parse(input);
        assert!(
            !errors.is_empty() || program.len() <= input.len(),
            "input: {:?}",
            input
        );
    }
}
