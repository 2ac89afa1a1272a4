//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Illegal characters, which become tokens instead of errors

pub mod lexer;
pub mod tokens;
