use std::cell::OnceCell;

use thiserror::Error;

use crate::Position;

/// Broken write-once invariant. Never caused by the input program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingFault {
    #[error("{name:?} at {position} is already bound")]
    AlreadyBound { name: String, position: Position },
    #[error("{name:?} at {position} read before it was bound")]
    Unbound { name: String, position: Position },
}

/// Write-once cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::new()
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Slot {
            cell: OnceCell::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Stores `value`, handing it back if the slot was already filled.
    pub fn fill(&self, value: T) -> Result<(), T> {
        self.cell.set(value)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

/// Link from a use site to a declaration of kind `D`.
///
/// `Explicit` bindings come from names written in the source and start out
/// empty. `Implicit` bindings are synthesized already bound, e.g. the
/// enclosing class of an unqualified field access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<D> {
    Explicit {
        name: String,
        position: Position,
        slot: Slot<D>,
    },
    Implicit(D),
}

impl<D> Binding<D> {
    pub fn explicit(name: impl Into<String>, position: Position) -> Self {
        Binding::Explicit {
            name: name.into(),
            position,
            slot: Slot::new(),
        }
    }

    pub fn implicit(declaration: D) -> Self {
        Binding::Implicit(declaration)
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            Binding::Explicit { slot, .. } => slot.is_resolved(),
            Binding::Implicit(_) => true,
        }
    }

    /// Binds the name. A second call is a fault, as is resolving an
    /// implicit binding.
    pub fn resolve_to(&self, declaration: D) -> Result<(), BindingFault> {
        match self {
            Binding::Explicit {
                name,
                position,
                slot,
            } => slot.fill(declaration).map_err(|_| BindingFault::AlreadyBound {
                name: name.clone(),
                position: position.clone(),
            }),
            Binding::Implicit(_) => Err(BindingFault::AlreadyBound {
                name: String::from("<implicit>"),
                position: Position::null(),
            }),
        }
    }

    pub fn declaration(&self) -> Result<&D, BindingFault> {
        match self {
            Binding::Explicit {
                name,
                position,
                slot,
            } => slot.get().ok_or_else(|| BindingFault::Unbound {
                name: name.clone(),
                position: position.clone(),
            }),
            Binding::Implicit(declaration) => Ok(declaration),
        }
    }
}
