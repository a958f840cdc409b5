//! Deferred name binding.
//!
//! A name written in source is attached to its declaration after the
//! declaration table exists. This module provides the single-assignment
//! cell that carries that association:
//!
//! - `Slot<T>` - a write-once cell
//! - `Binding<D>` - a named, positioned slot or an already-known declaration
//! - `BindingFault` - the internal faults raised when the write-once rule breaks

pub mod binding;

#[cfg(test)]
mod tests;
