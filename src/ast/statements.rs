use crate::Span;

use super::{ast::NodeId, expressions::Expr, types::SymbolType};

#[derive(Debug, Clone)]
pub enum Stmt {
    Block(BlockStmt),
    Empty(Span),
    If(IfStmt),
    While(WhileStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    VarDecl(VarDeclStmt),
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub id: NodeId,
    pub ty: SymbolType,
    pub identifier: String,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}
