//! Name resolution and type checking.
//!
//! This module walks the syntax tree once after declarations have been
//! collected. While walking it:
//!
//! - Binds every written name to its declaration
//! - Computes and records the type of every expression
//! - Checks conditions, operands, assignments, arguments and returns
//! - Manages the scope chain of the current method
//!
//! All semantic errors are collected; the walk never stops early.

pub mod environment;
pub mod type_checker;
