//! Declaration tables.
//!
//! Every class, field, method and global known to a compilation unit is
//! recorded once in a `DeclarationTable` and never changed afterwards.
//! Other stages refer to declarations through copyable ids.
//!
//! - `declarations` - ids, declaration records and the table itself
//! - `collector` - builds the table from a parsed program
//! - `builtins` - the `System.out` / `System.in` declarations

pub mod builtins;
pub mod collector;
pub mod declarations;

#[cfg(test)]
mod tests;
