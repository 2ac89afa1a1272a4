use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node, Stmt},
    expressions::SymbolExpr,
};

/// `{ ... }` body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A bare expression used as a statement. The token is the first token of
/// the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}

/// `let <identifier> = <expression>;`
///
/// `value` is absent when the right-hand side failed to parse; the parser
/// has already recorded a diagnostic in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: Option<Expr>,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;

        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }

        write!(f, ";")
    }
}

/// `return <expression>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ", self.token_literal())?;

        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }

        write!(f, ";")
    }
}
