//! Type descriptors and the rules relating them.
//!
//! - `descriptor` - the computed type of an expression or declared type of a location
//! - `compatibility` - assignability and equality-comparability between descriptors

pub mod compatibility;
pub mod descriptor;

#[cfg(test)]
mod tests;
