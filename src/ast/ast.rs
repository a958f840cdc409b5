use crate::Span;

use super::{statements::BlockStmt, types::SymbolType};

/// Unique id handed out by the parser to every declaring node.
pub type NodeId = i32;

#[derive(Debug, Clone)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub id: NodeId,
    pub name: String,
    pub members: Vec<MemberDecl>,
    pub span: Span,
}

/// Members in source order.
#[derive(Debug, Clone)]
pub enum MemberDecl {
    Field(FieldDecl),
    Method(MethodDecl),
    MainMethod(MainMethodDecl),
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub ty: SymbolType,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ParameterDecl {
    pub ty: SymbolType,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub id: NodeId,
    pub return_type: SymbolType,
    pub name: String,
    pub parameters: Vec<ParameterDecl>,
    pub body: BlockStmt,
    pub span: Span,
}

/// `public static void <name>(String[] <parameter>)`
#[derive(Debug, Clone)]
pub struct MainMethodDecl {
    pub id: NodeId,
    pub name: String,
    pub parameter: String,
    pub parameter_span: Span,
    pub body: BlockStmt,
    pub span: Span,
}
