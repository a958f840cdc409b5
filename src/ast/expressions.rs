use std::fmt::Display;

use crate::{
    binding::binding::{Binding, BindingFault, Slot},
    declarations::declarations::{ClassId, FieldId, GlobalId, MethodId},
    types::descriptor::TypeDescriptor,
    Span,
};

use super::{ast::NodeId, types::SymbolType};

/// An expression node. `ty` is filled once by the resolution pass.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: Slot<TypeDescriptor>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            ty: Slot::new(),
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn set_type(&self, ty: TypeDescriptor) -> Result<(), BindingFault> {
        self.ty.fill(ty).map_err(|_| BindingFault::AlreadyBound {
            name: String::from("<expression type>"),
            position: self.span.start.clone(),
        })
    }

    pub fn get_type(&self) -> Result<&TypeDescriptor, BindingFault> {
        self.ty.get().ok_or_else(|| BindingFault::Unbound {
            name: String::from("<expression type>"),
            position: self.span.start.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Digits as written; range checked by the resolution pass.
    Number(String),
    Boolean(bool),
    Null,
    This,
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Index(IndexExpr),
    NewObject(NewObjectExpr),
    NewArray(NewArrayExpr),
}

/// What a bare name in an expression refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableDecl {
    Local(NodeId),
    Parameter { method: MethodId, index: usize },
    Field(FieldId),
    Global(GlobalId),
}

#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub declaration: Binding<VariableDecl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Or,
    And,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Not,
    Negate,
}

#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub operand: Box<Expr>,
    /// The operand is a literal written directly after the operator, not in parentheses.
    pub literal_operand: bool,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
}

/// `receiver.name(arguments)`, or `name(arguments)` on `this`.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub receiver: Option<Box<Expr>>,
    pub name: String,
    pub arguments: Vec<Expr>,
    pub method: Binding<MethodId>,
}

#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: String,
    pub field: Binding<FieldId>,
}

#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
}

/// `new Name()`
#[derive(Debug, Clone)]
pub struct NewObjectExpr {
    pub name: String,
    pub class: Binding<ClassId>,
}

/// `new T[size][]...`; `element.dimensions` counts every bracket pair,
/// including the sized one.
#[derive(Debug, Clone)]
pub struct NewArrayExpr {
    pub element: SymbolType,
    pub size: Box<Expr>,
}
