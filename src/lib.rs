#![allow(clippy::module_inception)]

//! Lexer and Pratt parser for the mscript language.
//!
//! Source text goes through [`lexer::lexer::Lexer`] into
//! [`parser::parser::Parser`], which produces an [`ast::ast::Program`] and
//! a list of [`errors::errors::Error`] diagnostics. Parsing never stops at
//! the first error; check the diagnostics before trusting the program.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::parse;
