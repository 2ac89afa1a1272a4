//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser records while it keeps
//! going over malformed input. It includes:
//!
//! - The `Error` enum and its messages
//! - Helpful suggestions for the command-line driver

pub mod errors;

#[cfg(test)]
mod tests;
