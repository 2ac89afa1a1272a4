/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions, the `Node` trait and the `Program` root
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
