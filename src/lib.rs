#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::Program,
    binding::binding::BindingFault,
    declarations::{collector::collect_with, declarations::DeclarationTable},
    errors::errors::Error,
    options::Options,
    type_checker::type_checker::resolve_and_check,
};

pub mod ast;
pub mod binding;
pub mod declarations;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
pub mod type_checker;
pub mod types;

extern crate regex;

/// Byte offset into a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Result of running the semantic stages over a parsed program.
#[derive(Debug)]
pub struct Analysis {
    pub table: DeclarationTable,
    pub errors: Vec<Error>,
}

impl Analysis {
    /// Code generation may only run when this holds.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Collects declarations and then resolves and type checks `program`.
///
/// Diagnostics from both stages end up in `Analysis::errors`, collection
/// first. An `Err` means the pass itself broke an invariant.
pub fn analyze(program: &Program, options: &Options) -> Result<Analysis, BindingFault> {
    let (table, mut errors) = collect_with(program, options);
    errors.extend(resolve_and_check(program, &table)?);

    debug!(errors = errors.len(), "semantic analysis finished");

    Ok(Analysis { table, errors })
}
