//! Error types and error handling for the compiler.
//!
//! This module defines the diagnostics reported to the user. It includes:
//!
//! - Error structures with source position information
//! - Lexical, syntactic and semantic error variants
//! - Error names and helpful suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
