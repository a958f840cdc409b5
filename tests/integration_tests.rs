//! Integration tests for the semantic front end.
//!
//! Each test runs the whole pipeline: tokenization, parsing, declaration
//! collection, then name resolution and type checking.

use std::rc::Rc;

use minijava::{
    analyze,
    ast::ast::Program,
    binding::binding::BindingFault,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    options::Options,
    parser::parser::parse,
    Analysis,
};

const FILE: &str = "Main.java";

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some(FILE.to_string())).unwrap();
    parse(tokens, Rc::new(FILE.to_string())).unwrap()
}

fn analyze_source(source: &str) -> Analysis {
    analyze(&parse_source(source), &Options::default()).unwrap()
}

fn offset_of(source: &str, needle: &str) -> u32 {
    source.find(needle).unwrap() as u32
}

fn names(errors: &[Error]) -> Vec<&str> {
    errors.iter().map(|error| error.get_error_name()).collect()
}

#[test]
fn test_valid_program() {
    let source = "
        class Factorial {
            public static void main(String[] args) {
                System.out.println(new Fac().compute(10));
            }
        }

        class Fac {
            public int compute(int num) {
                int result;
                if (num < 1) result = 1;
                else result = num * (this.compute(num - 1));
                return result;
            }
        }";

    let analysis = analyze_source(source);
    assert!(analysis.is_ok(), "{:?}", analysis.errors);
    assert!(analysis.table.entry_point().is_some());
}

#[test]
fn test_argument_mismatch_reported_once_at_call() {
    let source = "
        class Main {
            public static void main(String[] args) {
                Calc calc = new Calc();
                int sum = calc.add(1, true) + 2;
                System.out.println(sum);
            }
        }

        class Calc {
            public int add(int a, int b) { return a + b; }
        }";

    let analysis = analyze_source(source);

    assert_eq!(analysis.errors.len(), 1, "{:?}", analysis.errors);
    let error = &analysis.errors[0];
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TypeMismatch {
            expected: String::from("int"),
            received: String::from("boolean"),
        }
    );
    assert_eq!(error.get_position().0, offset_of(source, "calc.add("));
    assert_eq!(error.get_position().1.as_str(), FILE);
}

#[test]
fn test_null_assignment() {
    let scalar = "
        class Main {
            public static void main(String[] args) { int x = null; }
        }";
    let analysis = analyze_source(scalar);
    assert_eq!(names(&analysis.errors), vec!["TypeMismatch"]);
    assert_eq!(
        analysis.errors[0].get_position().0,
        offset_of(scalar, "null")
    );

    let array = "
        class Main {
            public static void main(String[] args) { int[] x = null; }
        }";
    assert!(analyze_source(array).is_ok());

    let assigned = "
        class Main {
            public static void main(String[] args) { int x; x = null; }
        }";
    let analysis = analyze_source(assigned);
    assert_eq!(names(&analysis.errors), vec!["TypeMismatch"]);
    assert_eq!(
        analysis.errors[0].get_position().0,
        offset_of(assigned, "null")
    );

    let assigned_array = "
        class Main {
            public static void main(String[] args) { int[] x; x = null; }
        }";
    assert!(analyze_source(assigned_array).is_ok());
}

#[test]
fn test_bare_return() {
    let source = "
        class Main {
            public static void main(String[] args) { }
        }
        class A {
            public int get() { return; }
            public void run() { return; }
        }";

    let analysis = analyze_source(source);

    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(
        analysis.errors[0].get_kind(),
        &ErrorImpl::MissingReturnValue {
            expected: String::from("int")
        }
    );
    assert_eq!(analysis.errors[0].get_position().0, offset_of(source, "return;"));
}

#[test]
fn test_collection_errors_come_first() {
    let source = "
        class A {
            public int m() { return true; }
        }";

    let analysis = analyze_source(source);
    assert_eq!(names(&analysis.errors), vec!["MissingEntryPoint", "TypeMismatch"]);
}

#[test]
fn test_errors_render_with_position() {
    let source = "class Main { public static void main(String[] args) { y = 1; } }";
    let analysis = analyze_source(source);

    assert_eq!(analysis.errors.len(), 1);
    assert_eq!(
        analysis.errors[0].to_string(),
        format!("name \"y\" not declared at {}:{}", FILE, offset_of(source, "y ="))
    );
}

#[test]
fn test_program_is_analyzed_once() {
    let program = parse_source(
        "class Main { public static void main(String[] args) { System.out.println(1); } }",
    );

    assert!(analyze(&program, &Options::default()).unwrap().is_ok());
    assert!(matches!(
        analyze(&program, &Options::default()),
        Err(BindingFault::AlreadyBound { .. })
    ));
}

#[test]
fn test_linked_list() {
    let source = "
        class Main {
            public static void main(String[] args) {
                List list = new List().init();
                list = list.push(3).push(4);
                System.out.println(list.length());
            }
        }

        class Node {
            public int value;
            public Node next;
            public Node init(int v, Node n) { value = v; next = n; return this; }
        }

        class List {
            public Node head;
            public int count;
            public List init() { head = null; count = 0; return this; }
            public List push(int v) {
                head = new Node().init(v, head);
                count = count + 1;
                return this;
            }
            public int length() {
                int n = 0;
                Node current = head;
                while (!(current == null)) { n = n + 1; current = current.next; }
                return n;
            }
        }";

    let analysis = analyze_source(source);
    assert!(analysis.is_ok(), "{:?}", analysis.errors);
}

#[test]
fn test_many_errors_in_one_program() {
    let source = "
        class Main {
            public static void main(String[] args) {
                Shape s = new Circle();
                int area = s.area(1);
                boolean big = area > true;
                args = null;
            }
        }

        class Shape {
            public int area() { return 0; }
            public void area() { }
        }";

    let analysis = analyze_source(source);
    assert_eq!(
        names(&analysis.errors),
        vec![
            "Redeclaration",
            "UndeclaredType",
            "UnexpectedArguments",
            "TypeMismatch",
            "InaccessibleName",
        ]
    );
}

#[test]
fn test_fragment_without_builtins() {
    let program = parse_source("class A { public int m() { return System.in.read(); } }");

    let analysis = analyze(&program, &Options::bare()).unwrap();
    assert_eq!(names(&analysis.errors), vec!["UndeclaredName"]);
}
