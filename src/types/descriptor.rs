use std::fmt::Display;

use crate::{binding::binding::Binding, declarations::declarations::ClassId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Integer,
    Boolean,
    Void,
    Null,
    Class {
        name: String,
        declaration: Binding<ClassId>,
    },
    /// Could not be determined because of an earlier error.
    Unresolved,
}

/// A kind plus an array nesting depth. Dimension 0 is a scalar.
///
/// `Null` and `Unresolved` always have dimension 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    kind: TypeKind,
    dimension: u32,
}

impl TypeDescriptor {
    pub fn new(kind: TypeKind, dimension: u32) -> Self {
        match kind {
            TypeKind::Null | TypeKind::Unresolved => TypeDescriptor { kind, dimension: 0 },
            _ => TypeDescriptor { kind, dimension },
        }
    }

    pub fn integer() -> Self {
        TypeDescriptor::new(TypeKind::Integer, 0)
    }

    pub fn boolean() -> Self {
        TypeDescriptor::new(TypeKind::Boolean, 0)
    }

    pub fn void() -> Self {
        TypeDescriptor::new(TypeKind::Void, 0)
    }

    pub fn null() -> Self {
        TypeDescriptor::new(TypeKind::Null, 0)
    }

    pub fn unresolved() -> Self {
        TypeDescriptor::new(TypeKind::Unresolved, 0)
    }

    /// Scalar class type bound to `declaration`.
    pub fn class(name: impl Into<String>, declaration: ClassId) -> Self {
        TypeDescriptor::new(
            TypeKind::Class {
                name: name.into(),
                declaration: Binding::implicit(declaration),
            },
            0,
        )
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Adds `dimensions` levels of array nesting.
    pub fn array_of(&self, dimensions: u32) -> Self {
        TypeDescriptor::new(self.kind.clone(), self.dimension + dimensions)
    }

    /// Type of one element, or `None` for scalars.
    pub fn element(&self) -> Option<Self> {
        match (&self.kind, self.dimension) {
            (TypeKind::Null | TypeKind::Unresolved, _) | (_, 0) => None,
            (kind, dimension) => Some(TypeDescriptor::new(kind.clone(), dimension - 1)),
        }
    }

    /// Whether `null` may be stored here.
    pub fn is_nullable(&self) -> bool {
        match self.kind {
            TypeKind::Null | TypeKind::Unresolved => false,
            TypeKind::Class { .. } => true,
            _ => self.dimension > 0,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        self.kind == TypeKind::Unresolved
    }

    /// `void` at any dimension.
    pub fn mentions_void(&self) -> bool {
        self.kind == TypeKind::Void
    }

    /// Name and declaration of a scalar class type.
    pub fn as_class(&self) -> Option<(&str, &Binding<ClassId>)> {
        match &self.kind {
            TypeKind::Class { name, declaration } if self.dimension == 0 => {
                Some((name.as_str(), declaration))
            }
            _ => None,
        }
    }

    /// Same kind, class name and dimension. Unresolved is identical to nothing.
    pub fn is_identical(&self, other: &TypeDescriptor) -> bool {
        if self.dimension != other.dimension {
            return false;
        }

        match (&self.kind, &other.kind) {
            (TypeKind::Unresolved, _) | (_, TypeKind::Unresolved) => false,
            (TypeKind::Class { name: a, .. }, TypeKind::Class { name: b, .. }) => a == b,
            (TypeKind::Class { .. }, _) | (_, TypeKind::Class { .. }) => false,
            (a, b) => a == b,
        }
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TypeKind::Integer => write!(f, "int")?,
            TypeKind::Boolean => write!(f, "boolean")?,
            TypeKind::Void => write!(f, "void")?,
            TypeKind::Null => write!(f, "null")?,
            TypeKind::Class { name, .. } => write!(f, "{}", name)?,
            TypeKind::Unresolved => write!(f, "<unresolved>")?,
        }

        for _ in 0..self.dimension {
            write!(f, "[]")?;
        }

        Ok(())
    }
}
