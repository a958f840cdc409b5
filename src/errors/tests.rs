//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("Test.java".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "Test.java");
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMismatch {
            expected: "int".to_string(),
            received: "boolean".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "TypeMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "Expected type `int`, received `boolean`"
    );
}

#[test]
fn test_undeclared_name_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredName {
            name: "foo".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UndeclaredName");
    assert!(matches!(error.get_kind(), ErrorImpl::UndeclaredName { name } if name == "foo"));
}

#[test]
fn test_redeclaration_error() {
    let error = Error::new(
        ErrorImpl::Redeclaration {
            name: "x".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "Redeclaration");
}

#[test]
fn test_no_such_member_error() {
    let error = Error::new(
        ErrorImpl::NoSuchMember {
            member: "size".to_string(),
            type_: "int[]".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NoSuchMember");
    assert_eq!(
        error.get_kind().to_string(),
        "type int[] has no member \"size\""
    );
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(ErrorImpl::NotAssignable, at(7));

    assert_eq!(error.to_string(), "left-hand side is not assignable at Test.java:7");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_argument_count_errors() {
    let too_many = Error::new(
        ErrorImpl::UnexpectedArguments {
            expected: 2,
            received: 3,
        },
        at(0),
    );
    let too_few = Error::new(
        ErrorImpl::MissingArguments {
            expected: 3,
            received: 1,
        },
        at(0),
    );

    assert_eq!(too_many.get_error_name(), "UnexpectedArguments");
    assert_eq!(too_few.get_error_name(), "MissingArguments");
}

#[test]
fn test_entry_point_errors() {
    assert_eq!(
        Error::new(ErrorImpl::MissingEntryPoint, Position::null()).get_error_name(),
        "MissingEntryPoint"
    );
    assert_eq!(
        Error::new(ErrorImpl::DuplicateEntryPoint, at(3)).get_error_name(),
        "DuplicateEntryPoint"
    );
}
