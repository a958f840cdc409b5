//! Unit tests for the write-once binding cells.

use crate::binding::binding::{Binding, BindingFault, Slot};
use crate::Position;
use std::rc::Rc;

fn pos(offset: u32) -> Position {
    Position(offset, Rc::new("Test.java".to_string()))
}

#[test]
fn test_slot_starts_empty() {
    let slot: Slot<usize> = Slot::new();
    assert!(!slot.is_resolved());
    assert_eq!(slot.get(), None);
}

#[test]
fn test_slot_fills_once() {
    let slot = Slot::new();
    assert_eq!(slot.fill(3), Ok(()));
    assert_eq!(slot.fill(4), Err(4));
    assert_eq!(slot.get(), Some(&3));
}

#[test]
fn test_explicit_binding_resolves() {
    let binding = Binding::explicit("Foo", pos(5));
    assert!(!binding.is_resolved());

    binding.resolve_to(1usize).unwrap();

    assert!(binding.is_resolved());
    assert_eq!(binding.declaration(), Ok(&1));
}

#[test]
fn test_rebinding_is_a_fault() {
    let binding = Binding::explicit("x", pos(9));
    binding.resolve_to(1usize).unwrap();

    match binding.resolve_to(2) {
        Err(BindingFault::AlreadyBound { name, position }) => {
            assert_eq!(name, "x");
            assert_eq!(position.0, 9);
        }
        other => panic!("Expected AlreadyBound, got {:?}", other),
    }
    assert_eq!(binding.declaration(), Ok(&1));
}

#[test]
fn test_reading_unbound_is_a_fault() {
    let binding: Binding<usize> = Binding::explicit("y", pos(2));

    assert!(matches!(
        binding.declaration(),
        Err(BindingFault::Unbound { name, .. }) if name == "y"
    ));
}

#[test]
fn test_implicit_binding_is_bound() {
    let binding = Binding::implicit(7usize);

    assert!(binding.is_resolved());
    assert_eq!(binding.declaration(), Ok(&7));
    assert!(matches!(
        binding.resolve_to(8),
        Err(BindingFault::AlreadyBound { .. })
    ));
}
