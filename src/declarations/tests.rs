use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    options::Options,
    parser::parser::parse,
    types::descriptor::TypeDescriptor,
};

use super::{
    builtins::{self, SYSTEM_GLOBAL, SYSTEM_IN_CLASS, SYSTEM_OUT_CLASS},
    collector::{collect, collect_with},
    declarations::{BasicType, DeclarationTable, MethodKind, PrimitiveType},
};

fn program(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), None).unwrap();
    parse(tokens, Rc::new(String::from("shell"))).unwrap()
}

fn names(errors: &[Error]) -> Vec<&str> {
    errors.iter().map(|error| error.get_error_name()).collect()
}

#[test]
fn test_collects_classes_and_members() {
    let program = program(
        "class Main { public static void main(String[] a) { } }
         class Point {
            public int x;
            public Point next;
            public int[] move(int dx, boolean wrap) { return null; }
         }",
    );
    let (table, errors) = collect(&program);
    assert!(errors.is_empty(), "{:?}", errors);

    let point = table.lookup_class("Point").unwrap();
    assert_eq!(table.class_for_node(program.classes[1].id), Some(point));

    let x = table.lookup_field(point, "x").unwrap();
    assert_eq!(table.field(x).ty, TypeDescriptor::integer());
    assert_eq!(table.field(x).owner, point);

    let next = table.lookup_field(point, "next").unwrap();
    assert_eq!(table.field(next).ty, TypeDescriptor::class("Point", point));

    let method = table.method(table.lookup_method(point, "move").unwrap());
    assert_eq!(method.kind, MethodKind::Instance);
    assert_eq!(method.return_type, TypeDescriptor::integer().array_of(1));
    assert_eq!(method.parameters.len(), 2);
    assert_eq!(method.parameters[1].name, "wrap");
    assert_eq!(method.parameters[1].ty, TypeDescriptor::boolean());
}

#[test]
fn test_entry_point() {
    let program = program("class Main { public static void main(String[] a) { } }");
    let (table, errors) = collect(&program);
    assert!(errors.is_empty());

    let main = table.entry_point().unwrap();
    assert!(table.method(main).is_static());
    assert_eq!(table.method(main).return_type, TypeDescriptor::void());

    // Static methods are not visible to instance method lookup
    let class = table.lookup_class("Main").unwrap();
    assert_eq!(table.lookup_method(class, "main"), None);
}

#[test]
fn test_missing_entry_point() {
    let program = program("class A { }");

    let (table, errors) = collect(&program);
    assert_eq!(names(&errors), vec!["MissingEntryPoint"]);
    assert_eq!(errors[0].get_position(), &program.span.start);
    assert_eq!(table.entry_point(), None);

    let (_, errors) = collect_with(&program, &Options::bare());
    assert!(errors.is_empty());
}

#[test]
fn test_duplicate_entry_point() {
    let program = program(
        "class A { public static void main(String[] a) { } }
         class B { public static void main(String[] b) { } }",
    );
    let (table, errors) = collect(&program);

    assert_eq!(names(&errors), vec!["DuplicateEntryPoint"]);
    let a = table.lookup_class("A").unwrap();
    assert_eq!(table.method(table.entry_point().unwrap()).owner, a);
}

#[test]
fn test_invalid_entry_point() {
    let program = program("class A { public static void start(String[] a) { } }");
    let (_, errors) = collect(&program);

    assert_eq!(
        errors[1].get_kind(),
        &ErrorImpl::InvalidEntryPoint {
            name: String::from("start")
        }
    );
    // Reported at the start of the program, so it sorts first
    assert_eq!(names(&errors), vec!["MissingEntryPoint", "InvalidEntryPoint"]);
}

#[test]
fn test_collection_errors_in_source_order() {
    let source = "class A { public int f; public int f; } class A { }";
    let program = program(source);
    let (_, errors) = collect_with(&program, &Options::bare());

    assert_eq!(names(&errors), vec!["Redeclaration", "Redeclaration"]);
    assert_eq!(errors[0].get_position().0, 24);
    assert_eq!(errors[1].get_position().0, 40);
}

#[test]
fn test_class_redeclaration() {
    let program = program("class A { public int x; } class A { public int y; }");
    let (table, errors) = collect_with(&program, &Options::bare());

    assert_eq!(names(&errors), vec!["Redeclaration"]);
    assert_eq!(errors[0].get_position(), &program.classes[1].span.start);

    // The first declaration wins the name, the second keeps its own record
    let first = table.lookup_class("A").unwrap();
    assert_eq!(table.class_for_node(program.classes[0].id), Some(first));
    let second = table.class_for_node(program.classes[1].id).unwrap();
    assert_ne!(first, second);
    assert!(table.lookup_field(first, "x").is_some());
    assert!(table.lookup_field(second, "y").is_some());
}

#[test]
fn test_member_redeclaration() {
    let program = program(
        "class A {
            public int x;
            public boolean x;
            public void m() { }
            public int m() { return 0; }
            public void n(int p, int p) { }
        }",
    );
    let (table, errors) = collect_with(&program, &Options::bare());

    assert_eq!(names(&errors), vec!["Redeclaration", "Redeclaration", "Redeclaration"]);

    let class = table.lookup_class("A").unwrap();
    let x = table.lookup_field(class, "x").unwrap();
    assert_eq!(table.field(x).ty, TypeDescriptor::integer());
    let m = table.lookup_method(class, "m").unwrap();
    assert_eq!(table.method(m).return_type, TypeDescriptor::void());
}

#[test]
fn test_fields_and_methods_do_not_collide() {
    let program = program("class A { public int size; public int size() { return size; } }");
    let (_, errors) = collect_with(&program, &Options::bare());

    assert!(errors.is_empty());
}

#[test]
fn test_member_types_may_name_later_classes() {
    let program = program("class A { public B b; public B make(B other) { return other; } } class B { }");
    let (table, errors) = collect_with(&program, &Options::bare());
    assert!(errors.is_empty());

    let a = table.lookup_class("A").unwrap();
    let b = table.lookup_class("B").unwrap();
    let field = table.lookup_field(a, "b").unwrap();
    assert_eq!(table.field(field).ty, TypeDescriptor::class("B", b));
}

#[test]
fn test_unknown_member_types_are_unresolved() {
    let program = program("class A { public Missing m; }");
    let (table, errors) = collect_with(&program, &Options::bare());

    // Reported once, by the resolution pass
    assert!(errors.is_empty());
    let a = table.lookup_class("A").unwrap();
    let field = table.lookup_field(a, "m").unwrap();
    assert!(table.field(field).ty.is_unresolved());
}

#[test]
fn test_builtins() {
    let mut table = DeclarationTable::new();
    let system = builtins::install(&mut table);

    assert_eq!(table.lookup_global(SYSTEM_GLOBAL), Some(system));

    let (_, class) = table.global(system).ty.as_class().unwrap();
    let system_class = *class.declaration().unwrap();
    let out = table.lookup_field(system_class, "out").unwrap();
    let system_out = table.lookup_class(SYSTEM_OUT_CLASS).unwrap();
    assert_eq!(table.field(out).ty, TypeDescriptor::class(SYSTEM_OUT_CLASS, system_out));

    let println = table.method(table.lookup_method(system_out, "println").unwrap());
    assert_eq!(println.return_type, TypeDescriptor::void());
    assert_eq!(println.parameters.len(), 1);
    assert_eq!(println.parameters[0].ty, TypeDescriptor::integer());

    let system_in = table.lookup_class(SYSTEM_IN_CLASS).unwrap();
    let read = table.method(table.lookup_method(system_in, "read").unwrap());
    assert_eq!(read.return_type, TypeDescriptor::integer());
    assert!(read.parameters.is_empty());
}

#[test]
fn test_builtins_follow_options() {
    let program = program("class A { }");

    let (table, _) = collect(&program);
    assert!(table.lookup_global(SYSTEM_GLOBAL).is_some());

    let (table, _) = collect_with(&program, &Options::bare());
    assert!(table.lookup_global(SYSTEM_GLOBAL).is_none());
    assert_eq!(table.classes().count(), 1);
}

#[test]
fn test_basic_type_lookup() {
    let program = program("class Foo { }");
    let (table, _) = collect_with(&program, &Options::bare());

    assert_eq!(
        table.lookup_basic_type("int"),
        Some(BasicType::Primitive(PrimitiveType::Integer))
    );
    assert_eq!(
        table.lookup_basic_type("Foo"),
        table.lookup_class("Foo").map(BasicType::Class)
    );
    assert_eq!(table.lookup_basic_type("Bar"), None);
    assert!(table.descriptor_for_name("Bar", 2).is_unresolved());
    assert_eq!(
        table.descriptor_for_name("boolean", 2),
        TypeDescriptor::boolean().array_of(2)
    );
}
