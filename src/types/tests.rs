//! Unit tests for type descriptors and the compatibility rules.

use crate::declarations::declarations::ClassId;
use crate::types::compatibility::{can_assign, can_compare_equal, is_suppressed};
use crate::types::descriptor::{TypeDescriptor, TypeKind};

fn class_a() -> TypeDescriptor {
    TypeDescriptor::class("A", ClassId(0))
}

fn class_b() -> TypeDescriptor {
    TypeDescriptor::class("B", ClassId(1))
}

/// Null plus every base kind at dimensions 0 through 2.
fn all_types() -> Vec<TypeDescriptor> {
    let mut types = vec![TypeDescriptor::null()];
    for base in [
        TypeDescriptor::void(),
        TypeDescriptor::integer(),
        TypeDescriptor::boolean(),
        class_a(),
        class_b(),
    ] {
        for dimension in 0..3 {
            types.push(base.array_of(dimension));
        }
    }
    types
}

#[test]
fn test_display() {
    assert_eq!(TypeDescriptor::integer().to_string(), "int");
    assert_eq!(TypeDescriptor::boolean().array_of(2).to_string(), "boolean[][]");
    assert_eq!(class_a().array_of(1).to_string(), "A[]");
    assert_eq!(TypeDescriptor::null().to_string(), "null");
    assert_eq!(TypeDescriptor::unresolved().to_string(), "<unresolved>");
}

#[test]
fn test_null_and_unresolved_have_no_dimension() {
    assert_eq!(TypeDescriptor::null().array_of(2).dimension(), 0);
    assert_eq!(TypeDescriptor::new(TypeKind::Unresolved, 3).dimension(), 0);
}

#[test]
fn test_element_removes_one_dimension() {
    let matrix = TypeDescriptor::integer().array_of(2);

    assert_eq!(matrix.element(), Some(TypeDescriptor::integer().array_of(1)));
    assert_eq!(TypeDescriptor::integer().element(), None);
    assert_eq!(TypeDescriptor::null().element(), None);
}

#[test]
fn test_nullability() {
    assert!(!TypeDescriptor::integer().is_nullable());
    assert!(!TypeDescriptor::boolean().is_nullable());
    assert!(!TypeDescriptor::void().is_nullable());
    assert!(!TypeDescriptor::null().is_nullable());
    assert!(!TypeDescriptor::unresolved().is_nullable());

    assert!(class_a().is_nullable());
    assert!(TypeDescriptor::integer().array_of(1).is_nullable());
    assert!(TypeDescriptor::void().array_of(2).is_nullable());
}

#[test]
fn test_null_assignable_exactly_to_nullable() {
    let null = TypeDescriptor::null();

    for target in all_types() {
        assert_eq!(
            can_assign(&null, &target),
            target.is_nullable(),
            "null into {}",
            target
        );
    }
}

#[test]
fn test_nothing_assignable_to_null() {
    let null = TypeDescriptor::null();

    for source in all_types() {
        assert!(!can_assign(&source, &null), "{} into null", source);
    }
}

#[test]
fn test_assign_requires_exact_match() {
    let types = all_types();

    for source in types.iter().filter(|t| *t.kind() != TypeKind::Null) {
        for target in types.iter() {
            let expected = source.to_string() == target.to_string();
            assert_eq!(
                can_assign(source, target),
                expected,
                "{} into {}",
                source,
                target
            );
        }
    }
}

#[test]
fn test_distinct_classes_not_assignable() {
    assert!(!can_assign(&class_a(), &class_b()));
    assert!(can_assign(&class_a(), &class_a()));
    assert!(!can_assign(&class_a().array_of(1), &class_a()));
}

#[test]
fn test_void_assignable_to_void() {
    assert!(can_assign(&TypeDescriptor::void(), &TypeDescriptor::void()));
}

#[test]
fn test_compare_is_symmetric() {
    let types = all_types();

    for a in types.iter() {
        for b in types.iter() {
            assert_eq!(
                can_compare_equal(a, b),
                can_compare_equal(b, a),
                "{} == {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_scalar_void_comparable_to_nothing() {
    let void = TypeDescriptor::void();

    for other in all_types() {
        assert!(!can_compare_equal(&void, &other), "void == {}", other);
    }
}

#[test]
fn test_value_scalars_compare_only_to_themselves() {
    let null = TypeDescriptor::null();

    for scalar in [TypeDescriptor::integer(), TypeDescriptor::boolean()] {
        assert!(can_compare_equal(&scalar, &scalar));
        assert!(!can_compare_equal(&scalar, &null));
        for other in all_types() {
            if other.to_string() != scalar.to_string() {
                assert!(!can_compare_equal(&scalar, &other), "{} == {}", scalar, other);
            }
        }
    }
}

#[test]
fn test_arrays_and_classes_compare_to_themselves_and_null() {
    let null = TypeDescriptor::null();

    for t in all_types().into_iter().filter(|t| t.is_nullable()) {
        assert!(can_compare_equal(&t, &t), "{} == {}", t, t);
        assert!(can_compare_equal(&t, &null), "{} == null", t);
    }
}

#[test]
fn test_null_compares_to_null() {
    assert!(can_compare_equal(&TypeDescriptor::null(), &TypeDescriptor::null()));
}

#[test]
fn test_distinct_classes_not_comparable() {
    assert!(!can_compare_equal(&class_a(), &class_b()));
    assert!(!can_compare_equal(&class_a(), &class_a().array_of(1)));
}

#[test]
fn test_unresolved_is_silent() {
    let unresolved = TypeDescriptor::unresolved();

    for other in all_types() {
        assert!(!can_assign(&unresolved, &other));
        assert!(!can_assign(&other, &unresolved));
        assert!(!can_compare_equal(&unresolved, &other));
        assert!(is_suppressed(&unresolved, &other));
    }
    assert!(!is_suppressed(&class_a(), &class_b()));
}
