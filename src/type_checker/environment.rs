use std::collections::HashMap;

use crate::{
    ast::expressions::VariableDecl,
    errors::errors::{Error, ErrorImpl},
    types::descriptor::TypeDescriptor,
    Position,
};

/// A parameter or local variable in scope.
///
/// `declaration` is `None` for names that are in scope but may not be read,
/// like the parameter of `main`.
#[derive(Debug, Clone)]
pub struct Variable {
    pub declaration: Option<VariableDecl>,
    pub ty: TypeDescriptor,
}

/// One scope: a method's parameters or a block's locals.
#[derive(Debug)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable: Variable,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::Redeclaration {
                    name: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, variable);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Variable> {
        self.variable_lookup.get(variable_name)
    }
}
