/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, class and member declarations
/// - expressions: Expression nodes and operators
/// - statements: Statement nodes
/// - types: Type names as written in source
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
