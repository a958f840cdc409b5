//! Assignability and equality-comparability.
//!
//! Every check involving an `Unresolved` operand answers `false`. Callers are
//! expected to skip reporting in that case, since the operand's own error has
//! already been recorded.

use tracing::trace;

use super::descriptor::{TypeDescriptor, TypeKind};

/// Can a value of type `source` be stored where `target` is expected?
pub fn can_assign(source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
    let result = if source.is_unresolved() || target.is_unresolved() {
        false
    } else if *source.kind() == TypeKind::Null {
        target.is_nullable()
    } else {
        source.is_identical(target)
    };

    trace!(%source, %target, result, "can_assign");
    result
}

/// Can `a == b` be written? Symmetric in its arguments.
pub fn can_compare_equal(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    if a.is_unresolved() || b.is_unresolved() {
        return false;
    }

    if is_scalar_void(a) || is_scalar_void(b) {
        return false;
    }

    match (a.kind(), b.kind()) {
        (TypeKind::Null, TypeKind::Null) => true,
        (TypeKind::Null, _) => b.is_nullable(),
        (_, TypeKind::Null) => a.is_nullable(),
        _ => a.is_identical(b),
    }
}

/// True when either side is `Unresolved` and a failed check should stay silent.
pub fn is_suppressed(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    a.is_unresolved() || b.is_unresolved()
}

fn is_scalar_void(descriptor: &TypeDescriptor) -> bool {
    *descriptor.kind() == TypeKind::Void && descriptor.dimension() == 0
}
