use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UndeclaredName { .. } => "UndeclaredName",
            ErrorImpl::UndeclaredType { .. } => "UndeclaredType",
            ErrorImpl::NoSuchMember { .. } => "NoSuchMember",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::NotAssignable => "NotAssignable",
            ErrorImpl::UnexpectedReturnValue => "UnexpectedReturnValue",
            ErrorImpl::MissingReturnValue { .. } => "MissingReturnValue",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::Redeclaration { .. } => "Redeclaration",
            ErrorImpl::StaticContext { .. } => "StaticContext",
            ErrorImpl::InaccessibleName { .. } => "InaccessibleName",
            ErrorImpl::VoidNotAllowed => "VoidNotAllowed",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::MissingEntryPoint => "MissingEntryPoint",
            ErrorImpl::DuplicateEntryPoint => "DuplicateEntryPoint",
            ErrorImpl::InvalidEntryPoint { .. } => "InvalidEntryPoint",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Comment is never closed, add a `*/`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UndeclaredName { name } => {
                ErrorTip::Suggestion(format!("Name `{}` is not declared in this scope", name))
            }
            ErrorImpl::UndeclaredType { name } => {
                ErrorTip::Suggestion(format!("Type `{}` is not declared", name))
            }
            ErrorImpl::NoSuchMember { member, type_ } => {
                ErrorTip::Suggestion(format!("Type `{}` has no member `{}`", type_, member))
            }
            ErrorImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::NotAssignable => ErrorTip::Suggestion(String::from(
                "Only variables, fields and array elements can be assigned to",
            )),
            ErrorImpl::UnexpectedReturnValue => ErrorTip::Suggestion(String::from(
                "A `void` method cannot return a value",
            )),
            ErrorImpl::MissingReturnValue { expected } => ErrorTip::Suggestion(format!(
                "Expected a return value of type `{}`",
                expected
            )),
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::Redeclaration { name } => {
                ErrorTip::Suggestion(format!("`{}` is already declared", name))
            }
            ErrorImpl::StaticContext { name } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used from the static `main` method",
                name
            )),
            ErrorImpl::InaccessibleName { name } => {
                ErrorTip::Suggestion(format!("`{}` cannot be accessed", name))
            }
            ErrorImpl::VoidNotAllowed => ErrorTip::Suggestion(String::from(
                "`void` can only be used as a method return type",
            )),
            ErrorImpl::IntegerOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Integer literal `{}` does not fit into 32 bits",
                literal
            )),
            ErrorImpl::MissingEntryPoint => ErrorTip::Suggestion(String::from(
                "Declare `public static void main(String[] args)` in one class",
            )),
            ErrorImpl::DuplicateEntryPoint => ErrorTip::Suggestion(String::from(
                "Only one `main` method may be declared",
            )),
            ErrorImpl::InvalidEntryPoint { name } => ErrorTip::Suggestion(format!(
                "Static method `{}` must be called `main`",
                name
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("name {name:?} not declared")]
    UndeclaredName { name: String },
    #[error("type {name:?} not declared")]
    UndeclaredType { name: String },
    #[error("type {type_} has no member {member:?}")]
    NoSuchMember { member: String, type_: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMismatch { expected: String, received: String },
    #[error("left-hand side is not assignable")]
    NotAssignable,
    #[error("unexpected return value in void method")]
    UnexpectedReturnValue,
    #[error("missing return value of type {expected}")]
    MissingReturnValue { expected: String },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("{name:?} already declared")]
    Redeclaration { name: String },
    #[error("{name:?} used in static context")]
    StaticContext { name: String },
    #[error("{name:?} cannot be accessed")]
    InaccessibleName { name: String },
    #[error("void is not a valid variable type")]
    VoidNotAllowed,
    #[error("integer literal {literal} out of range")]
    IntegerOutOfRange { literal: String },
    #[error("no main method declared")]
    MissingEntryPoint,
    #[error("main method declared more than once")]
    DuplicateEntryPoint,
    #[error("static method {name:?} is not a valid entry point")]
    InvalidEntryPoint { name: String },
}
