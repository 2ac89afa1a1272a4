use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST. Also used for `let` names and
/// function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Node for SymbolExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents a 64-bit signed integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.value)
    }
}

/// String Expression
/// Holds the raw text between the quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub token: Token,
    pub value: String,
}

impl Node for StringExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operation (`!x`, `-x`) in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// `if (<condition>) <consequence> else <alternative>`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }

        Ok(())
    }
}

/// Function Literal
/// `fn(<parameters>) <body>`
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub token: Token,
    pub parameters: Vec<SymbolExpr>,
    pub body: BlockStmt,
}

impl Node for FnExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for FnExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            join(&self.parameters),
            self.body
        )
    }
}

/// Call Expression
/// The token is the opening parenthesis of the argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({})", self.function, join(&self.arguments))
    }
}
