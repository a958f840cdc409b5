//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a MiniJava program. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Class, field and method declarations
//! - Statement parsing (local variables, blocks, control flow, returns)
//! - Expression parsing (binary ops, calls, field and array access, `new`)
//! - Type parsing for declared types
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
