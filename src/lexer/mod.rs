//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts MiniJava source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - `/* */` comments and whitespace

pub mod lexer;
pub mod tokens;
