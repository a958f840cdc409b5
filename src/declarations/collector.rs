//! Builds the declaration table for a program.
//!
//! Classes are registered before any member so that member types may name
//! classes declared further down.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    ast::ast::{ClassDecl, FieldDecl, MainMethodDecl, MemberDecl, MethodDecl, Program},
    errors::errors::{Error, ErrorImpl},
    options::Options,
    types::descriptor::TypeDescriptor,
    Position,
};

use super::{
    builtins,
    declarations::{
        ClassId, DeclarationTable, FieldDeclaration, MethodDeclaration, MethodKind,
        ParameterDeclaration,
    },
};

const ENTRY_POINT_NAME: &str = "main";

struct Collector {
    table: DeclarationTable,
    errors: Vec<Error>,
}

/// Collects declarations with the default options.
pub fn collect(program: &Program) -> (DeclarationTable, Vec<Error>) {
    collect_with(program, &Options::default())
}

pub fn collect_with(program: &Program, options: &Options) -> (DeclarationTable, Vec<Error>) {
    let mut collector = Collector {
        table: DeclarationTable::new(),
        errors: vec![],
    };

    if options.builtins {
        builtins::install(&mut collector.table);
    }

    let classes: Vec<ClassId> = program
        .classes
        .iter()
        .map(|class| collector.declare_class(class))
        .collect();

    for (class, id) in program.classes.iter().zip(classes) {
        collector.declare_members(class, id);
    }

    if options.require_entry_point && collector.table.entry_point().is_none() {
        collector.errors.push(Error::new(
            ErrorImpl::MissingEntryPoint,
            program.span.start.clone(),
        ));
    }

    // Class redeclarations are found before any member is looked at
    collector
        .errors
        .sort_by_key(|error| error.get_position().0);

    debug!(
        classes = program.classes.len(),
        errors = collector.errors.len(),
        "declarations collected"
    );

    (collector.table, collector.errors)
}

impl Collector {
    fn redeclaration(&mut self, name: &str, position: &Position) {
        self.errors.push(Error::new(
            ErrorImpl::Redeclaration {
                name: name.to_string(),
            },
            position.clone(),
        ));
    }

    fn declare_class(&mut self, class: &ClassDecl) -> ClassId {
        if self.table.lookup_class(&class.name).is_some() {
            self.redeclaration(&class.name, &class.span.start);
        }

        self.table
            .add_class(&class.name, class.span.start.clone(), Some(class.id))
    }

    fn declare_members(&mut self, class: &ClassDecl, owner: ClassId) {
        for member in class.members.iter() {
            match member {
                MemberDecl::Field(field) => self.declare_field(field, owner),
                MemberDecl::Method(method) => self.declare_method(method, owner),
                MemberDecl::MainMethod(main) => self.declare_main(main, owner),
            }
        }
    }

    fn descriptor(&self, name: &str, dimensions: u32) -> TypeDescriptor {
        self.table.descriptor_for_name(name, dimensions)
    }

    fn declare_field(&mut self, field: &FieldDecl, owner: ClassId) {
        if self.table.lookup_field(owner, &field.name).is_some() {
            self.redeclaration(&field.name, &field.span.start);
            return;
        }

        let ty = self.descriptor(&field.ty.name, field.ty.dimensions);
        self.table.add_field(FieldDeclaration {
            name: field.name.clone(),
            owner,
            ty,
            position: field.span.start.clone(),
        });
    }

    fn declare_method(&mut self, method: &MethodDecl, owner: ClassId) {
        if self.table.lookup_method(owner, &method.name).is_some() {
            self.redeclaration(&method.name, &method.span.start);
        }

        let mut seen = HashSet::new();
        let mut parameters = vec![];
        for parameter in method.parameters.iter() {
            if !seen.insert(parameter.name.as_str()) {
                self.redeclaration(&parameter.name, &parameter.span.start);
            }
            parameters.push(ParameterDeclaration {
                name: parameter.name.clone(),
                ty: self.descriptor(&parameter.ty.name, parameter.ty.dimensions),
                position: parameter.span.start.clone(),
            });
        }

        let return_type = self.descriptor(&method.return_type.name, method.return_type.dimensions);
        self.table.add_method(
            MethodDeclaration {
                name: method.name.clone(),
                owner,
                kind: MethodKind::Instance,
                return_type,
                parameters,
                position: method.span.start.clone(),
            },
            Some(method.id),
        );
    }

    fn declare_main(&mut self, main: &MainMethodDecl, owner: ClassId) {
        let valid = main.name == ENTRY_POINT_NAME;
        if !valid {
            self.errors.push(Error::new(
                ErrorImpl::InvalidEntryPoint {
                    name: main.name.clone(),
                },
                main.span.start.clone(),
            ));
        } else if self.table.entry_point().is_some() {
            self.errors.push(Error::new(
                ErrorImpl::DuplicateEntryPoint,
                main.span.start.clone(),
            ));
        }

        let id = self.table.add_method(
            MethodDeclaration {
                name: main.name.clone(),
                owner,
                kind: MethodKind::Main,
                return_type: TypeDescriptor::void(),
                parameters: vec![],
                position: main.span.start.clone(),
            },
            Some(main.id),
        );

        if valid && self.table.entry_point().is_none() {
            self.table.set_entry_point(id);
        }
    }
}
