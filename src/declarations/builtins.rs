//! `System.out` and `System.in`.
//!
//! Builtin class names start with `$`, which the lexer never accepts, so
//! source code can only reach them through the `System` global.

use tracing::trace;

use crate::{types::descriptor::TypeDescriptor, Position};

use super::declarations::{
    ClassId, DeclarationTable, FieldDeclaration, GlobalDeclaration, GlobalId,
    MethodDeclaration, MethodKind, ParameterDeclaration,
};

pub const SYSTEM_CLASS: &str = "$System";
pub const SYSTEM_OUT_CLASS: &str = "$SystemOut";
pub const SYSTEM_IN_CLASS: &str = "$SystemIn";
pub const SYSTEM_GLOBAL: &str = "System";

/// Declares the builtin classes and the `System` global.
pub fn install(table: &mut DeclarationTable) -> GlobalId {
    let system = table.add_class(SYSTEM_CLASS, Position::null(), None);
    let system_out = table.add_class(SYSTEM_OUT_CLASS, Position::null(), None);
    let system_in = table.add_class(SYSTEM_IN_CLASS, Position::null(), None);

    for (name, class, class_name) in [
        ("out", system_out, SYSTEM_OUT_CLASS),
        ("in", system_in, SYSTEM_IN_CLASS),
    ] {
        table.add_field(FieldDeclaration {
            name: name.to_string(),
            owner: system,
            ty: TypeDescriptor::class(class_name, class),
            position: Position::null(),
        });
    }

    let int_parameter = || {
        vec![ParameterDeclaration {
            name: String::from("value"),
            ty: TypeDescriptor::integer(),
            position: Position::null(),
        }]
    };

    add_method(table, system_out, "println", TypeDescriptor::void(), int_parameter());
    add_method(table, system_out, "write", TypeDescriptor::void(), int_parameter());
    add_method(table, system_out, "flush", TypeDescriptor::void(), vec![]);
    add_method(table, system_in, "read", TypeDescriptor::integer(), vec![]);

    trace!("builtins installed");

    table.add_global(GlobalDeclaration {
        name: SYSTEM_GLOBAL.to_string(),
        ty: TypeDescriptor::class(SYSTEM_CLASS, system),
        position: Position::null(),
    })
}

fn add_method(
    table: &mut DeclarationTable,
    owner: ClassId,
    name: &str,
    return_type: TypeDescriptor,
    parameters: Vec<ParameterDeclaration>,
) {
    table.add_method(
        MethodDeclaration {
            name: name.to_string(),
            owner,
            kind: MethodKind::Instance,
            return_type,
            parameters,
            position: Position::null(),
        },
        None,
    );
}
