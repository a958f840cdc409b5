use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{ClassDecl, MainMethodDecl, MemberDecl, MethodDecl, NodeId, Program},
        expressions::{
            AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr, ExprKind, IndexExpr,
            MemberExpr, NewArrayExpr, NewObjectExpr, PrefixExpr, PrefixOperator, SymbolExpr,
            VariableDecl,
        },
        statements::{BlockStmt, ReturnStmt, Stmt, VarDeclStmt},
        types::SymbolType,
    },
    binding::binding::BindingFault,
    declarations::declarations::{ClassId, DeclarationTable, MethodId},
    errors::errors::{Error, ErrorImpl},
    types::{
        compatibility::{can_assign, can_compare_equal, is_suppressed},
        descriptor::TypeDescriptor,
    },
    Position,
};

use super::environment::{Environment, Variable};

/// Walks a program once, binding every name and typing every expression.
///
/// Errors are collected rather than returned so the walk always reaches the
/// end of the program. Any check with an `Unresolved` operand stays silent.
pub struct TypeChecker<'a> {
    table: &'a DeclarationTable,
    /// Scopes of the current method, innermost last
    environments: Vec<Environment>,
    current_class: Option<ClassId>,
    current_method: Option<MethodId>,
    errors: Vec<Error>,
}

/// Resolves and type checks `program` against `table`.
///
/// Returns the semantic errors in source order. `Err` means a slot was bound
/// twice or read unbound, which no input program can cause.
pub fn resolve_and_check(
    program: &Program,
    table: &DeclarationTable,
) -> Result<Vec<Error>, BindingFault> {
    let mut type_checker = TypeChecker::new(table);

    for class in program.classes.iter() {
        type_checker.check_class(class)?;
    }

    let mut errors = type_checker.errors;
    // Argument mismatches are reported at the call, after the arguments' own errors
    errors.sort_by_key(|error| error.get_position().0);

    debug!(errors = errors.len(), "resolution pass finished");

    Ok(errors)
}

impl<'a> TypeChecker<'a> {
    pub fn new(table: &'a DeclarationTable) -> Self {
        TypeChecker {
            table,
            environments: vec![],
            current_class: None,
            current_method: None,
            errors: vec![],
        }
    }

    fn error(&mut self, error: ErrorImpl, position: Position) {
        trace!(error = %error, position = %position, "semantic error");
        self.errors.push(Error::new(error, position));
    }

    fn mismatch(&mut self, expected: &TypeDescriptor, received: &TypeDescriptor, position: Position) {
        self.error(
            ErrorImpl::TypeMismatch {
                expected: expected.to_string(),
                received: received.to_string(),
            },
            position,
        );
    }

    fn is_static_context(&self) -> bool {
        self.current_method
            .map(|method| self.table.method(method).is_static())
            .unwrap_or(false)
    }

    fn current_class_type(&self) -> Option<TypeDescriptor> {
        self.current_class
            .map(|class| TypeDescriptor::class(self.table.class(class).name.clone(), class))
    }

    // Declarations

    fn check_class(&mut self, class: &ClassDecl) -> Result<(), BindingFault> {
        let class_id = self
            .table
            .class_for_node(class.id)
            .ok_or_else(|| unregistered(&class.name, &class.span.start))?;

        debug!(class = %class.name, "checking class");
        self.current_class = Some(class_id);

        for member in class.members.iter() {
            match member {
                MemberDecl::Field(field) => {
                    let ty = self.bind_type(&field.ty)?;
                    self.reject_void(&ty, &field.ty);
                }
                MemberDecl::Method(method) => self.check_method(method)?,
                MemberDecl::MainMethod(main) => self.check_main_method(main)?,
            }
        }

        self.current_class = None;
        Ok(())
    }

    fn method_id(&self, node: NodeId, name: &str, position: &Position) -> Result<MethodId, BindingFault> {
        self.table
            .method_for_node(node)
            .ok_or_else(|| unregistered(name, position))
    }

    fn check_method(&mut self, method: &MethodDecl) -> Result<(), BindingFault> {
        let method_id = self.method_id(method.id, &method.name, &method.span.start)?;
        trace!(method = %method.name, "checking method");

        let return_type = self.bind_type(&method.return_type)?;
        if return_type.mentions_void() && return_type.dimension() > 0 {
            self.error(ErrorImpl::VoidNotAllowed, method.return_type.span.start.clone());
        }

        let mut environment = Environment::new();
        for (index, parameter) in method.parameters.iter().enumerate() {
            let ty = self.bind_type(&parameter.ty)?;
            self.reject_void(&ty, &parameter.ty);

            // Duplicates were reported during collection; the first one wins
            let _ = environment.declare_variable(
                parameter.name.clone(),
                Variable {
                    declaration: Some(VariableDecl::Parameter {
                        method: method_id,
                        index,
                    }),
                    ty,
                },
                parameter.span.start.clone(),
            );
        }

        self.check_body(method_id, environment, &method.body)
    }

    fn check_main_method(&mut self, main: &MainMethodDecl) -> Result<(), BindingFault> {
        let method_id = self.method_id(main.id, &main.name, &main.span.start)?;
        trace!(method = %main.name, "checking main method");

        let mut environment = Environment::new();
        let _ = environment.declare_variable(
            main.parameter.clone(),
            Variable {
                declaration: None,
                ty: TypeDescriptor::unresolved(),
            },
            main.parameter_span.start.clone(),
        );

        self.check_body(method_id, environment, &main.body)
    }

    /// Method bodies share the parameter scope.
    fn check_body(
        &mut self,
        method: MethodId,
        environment: Environment,
        body: &BlockStmt,
    ) -> Result<(), BindingFault> {
        self.current_method = Some(method);
        self.environments.push(environment);

        for stmt in body.body.iter() {
            self.check_stmt(stmt)?;
        }

        self.environments.clear();
        self.current_method = None;
        Ok(())
    }

    /// Binds the element name of a written type and builds its descriptor.
    fn bind_type(&mut self, ty: &SymbolType) -> Result<TypeDescriptor, BindingFault> {
        match self.table.lookup_basic_type(&ty.name) {
            Some(basic) => {
                ty.declaration.resolve_to(basic)?;
                Ok(self.table.descriptor(basic, ty.dimensions))
            }
            None => {
                self.error(
                    ErrorImpl::UndeclaredType {
                        name: ty.name.clone(),
                    },
                    ty.span.start.clone(),
                );
                Ok(TypeDescriptor::unresolved())
            }
        }
    }

    fn reject_void(&mut self, ty: &TypeDescriptor, written: &SymbolType) {
        if ty.mentions_void() {
            self.error(ErrorImpl::VoidNotAllowed, written.span.start.clone());
        }
    }

    // Scopes

    fn lookup_variable(&self, name: &str) -> Option<&Variable> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(name))
    }

    fn check_block(&mut self, block: &BlockStmt) -> Result<(), BindingFault> {
        self.environments.push(Environment::new());

        for stmt in block.body.iter() {
            self.check_stmt(stmt)?;
        }

        self.environments.pop();
        Ok(())
    }

    // Statements

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), BindingFault> {
        match stmt {
            Stmt::Block(block) => self.check_block(block),
            Stmt::Empty(_) => Ok(()),
            Stmt::If(stmt) => {
                self.check_expr(&stmt.condition, &TypeDescriptor::boolean())?;
                self.check_stmt(&stmt.consequent)?;
                if let Some(alternate) = &stmt.alternate {
                    self.check_stmt(alternate)?;
                }
                Ok(())
            }
            Stmt::While(stmt) => {
                self.check_expr(&stmt.condition, &TypeDescriptor::boolean())?;
                self.check_stmt(&stmt.body)
            }
            Stmt::Expression(stmt) => self.infer_expr(&stmt.expression).map(|_| ()),
            Stmt::Return(stmt) => self.check_return(stmt),
            Stmt::VarDecl(stmt) => self.check_var_decl(stmt),
        }
    }

    fn check_return(&mut self, stmt: &ReturnStmt) -> Result<(), BindingFault> {
        let return_type = match self.current_method {
            Some(method) => self.table.method(method).return_type.clone(),
            None => TypeDescriptor::void(),
        };
        let returns_void = return_type.mentions_void() && return_type.dimension() == 0;

        match &stmt.value {
            Some(value) if returns_void => {
                self.infer_expr(value)?;
                self.error(ErrorImpl::UnexpectedReturnValue, stmt.span.start.clone());
            }
            Some(value) => {
                self.check_expr(value, &return_type)?;
            }
            None if returns_void || return_type.is_unresolved() => {}
            None => self.error(
                ErrorImpl::MissingReturnValue {
                    expected: return_type.to_string(),
                },
                stmt.span.start.clone(),
            ),
        }

        Ok(())
    }

    fn check_var_decl(&mut self, stmt: &VarDeclStmt) -> Result<(), BindingFault> {
        let ty = self.bind_type(&stmt.ty)?;
        self.reject_void(&ty, &stmt.ty);

        if let Some(value) = &stmt.assigned_value {
            self.check_expr(value, &ty)?;
        }

        // Locals may shadow fields, but not parameters or other locals
        if self.lookup_variable(&stmt.identifier).is_some() {
            self.error(
                ErrorImpl::Redeclaration {
                    name: stmt.identifier.clone(),
                },
                stmt.span.start.clone(),
            );
            return Ok(());
        }

        let declared = match self.environments.last_mut() {
            Some(environment) => environment.declare_variable(
                stmt.identifier.clone(),
                Variable {
                    declaration: Some(VariableDecl::Local(stmt.id)),
                    ty,
                },
                stmt.span.start.clone(),
            ),
            None => Ok(()),
        };
        if let Err(error) = declared {
            self.errors.push(error);
        }

        Ok(())
    }

    // Expressions

    /// Infers `expr` and reports a mismatch unless it can be stored as `expected`.
    pub fn check_expr(
        &mut self,
        expr: &Expr,
        expected: &TypeDescriptor,
    ) -> Result<TypeDescriptor, BindingFault> {
        let actual = self.infer_expr(expr)?;

        if !can_assign(&actual, expected) && !is_suppressed(&actual, expected) {
            self.mismatch(expected, &actual, expr.get_span().start.clone());
        }

        Ok(actual)
    }

    /// Computes the type of `expr` and records it on the node.
    pub fn infer_expr(&mut self, expr: &Expr) -> Result<TypeDescriptor, BindingFault> {
        let position = expr.get_span().start.clone();

        let ty = match &expr.kind {
            ExprKind::Number(value) => {
                self.check_integer_literal(value, false, position);
                TypeDescriptor::integer()
            }
            ExprKind::Boolean(_) => TypeDescriptor::boolean(),
            ExprKind::Null => TypeDescriptor::null(),
            ExprKind::This => {
                if self.is_static_context() {
                    self.error(
                        ErrorImpl::StaticContext {
                            name: String::from("this"),
                        },
                        position,
                    );
                    TypeDescriptor::unresolved()
                } else {
                    self.current_class_type()
                        .unwrap_or_else(TypeDescriptor::unresolved)
                }
            }
            ExprKind::Symbol(symbol) => self.infer_symbol(symbol, position)?,
            ExprKind::Binary(binary) => self.infer_binary(binary, position)?,
            ExprKind::Prefix(prefix) => self.infer_prefix(prefix)?,
            ExprKind::Assignment(assignment) => self.infer_assignment(assignment, position)?,
            ExprKind::Call(call) => self.infer_call(call, position)?,
            ExprKind::Member(member) => self.infer_member(member, position)?,
            ExprKind::Index(index) => self.infer_index(index, position)?,
            ExprKind::NewObject(new) => self.infer_new_object(new, position)?,
            ExprKind::NewArray(new) => self.infer_new_array(new)?,
        };

        expr.set_type(ty.clone())?;
        Ok(ty)
    }

    /// `2147483648` only fits directly under a unary minus.
    fn check_integer_literal(&mut self, value: &str, negated: bool, position: Position) {
        let fits = if negated {
            format!("-{}", value).parse::<i32>().is_ok()
        } else {
            value.parse::<i32>().is_ok()
        };

        if !fits {
            self.error(
                ErrorImpl::IntegerOutOfRange {
                    literal: value.to_string(),
                },
                position,
            );
        }
    }

    /// Locals and parameters, then fields of the current class, then globals.
    fn infer_symbol(
        &mut self,
        symbol: &SymbolExpr,
        position: Position,
    ) -> Result<TypeDescriptor, BindingFault> {
        if let Some(variable) = self.lookup_variable(&symbol.value).cloned() {
            return match variable.declaration {
                Some(declaration) => {
                    symbol.declaration.resolve_to(declaration)?;
                    Ok(variable.ty)
                }
                None => {
                    self.error(
                        ErrorImpl::InaccessibleName {
                            name: symbol.value.clone(),
                        },
                        position,
                    );
                    Ok(TypeDescriptor::unresolved())
                }
            };
        }

        let field = self
            .current_class
            .and_then(|class| self.table.lookup_field(class, &symbol.value));
        if let Some(field) = field {
            if self.is_static_context() {
                self.error(
                    ErrorImpl::StaticContext {
                        name: symbol.value.clone(),
                    },
                    position,
                );
                return Ok(TypeDescriptor::unresolved());
            }

            symbol.declaration.resolve_to(VariableDecl::Field(field))?;
            return Ok(self.table.field(field).ty.clone());
        }

        if let Some(global) = self.table.lookup_global(&symbol.value) {
            symbol.declaration.resolve_to(VariableDecl::Global(global))?;
            return Ok(self.table.global(global).ty.clone());
        }

        self.error(
            ErrorImpl::UndeclaredName {
                name: symbol.value.clone(),
            },
            position,
        );
        Ok(TypeDescriptor::unresolved())
    }

    fn infer_binary(
        &mut self,
        binary: &BinaryExpr,
        position: Position,
    ) -> Result<TypeDescriptor, BindingFault> {
        let integer = TypeDescriptor::integer();
        let boolean = TypeDescriptor::boolean();

        match binary.operator {
            BinaryOperator::Or | BinaryOperator::And => {
                self.check_expr(&binary.left, &boolean)?;
                self.check_expr(&binary.right, &boolean)?;
                Ok(boolean)
            }
            BinaryOperator::Less
            | BinaryOperator::LessEquals
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEquals => {
                self.check_expr(&binary.left, &integer)?;
                self.check_expr(&binary.right, &integer)?;
                Ok(boolean)
            }
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => {
                self.check_expr(&binary.left, &integer)?;
                self.check_expr(&binary.right, &integer)?;
                Ok(integer)
            }
            BinaryOperator::Equals | BinaryOperator::NotEquals => {
                let left = self.infer_expr(&binary.left)?;
                let right = self.infer_expr(&binary.right)?;

                if !can_compare_equal(&left, &right) && !is_suppressed(&left, &right) {
                    self.mismatch(&left, &right, position);
                }
                Ok(boolean)
            }
        }
    }

    fn infer_prefix(&mut self, prefix: &PrefixExpr) -> Result<TypeDescriptor, BindingFault> {
        match prefix.operator {
            PrefixOperator::Not => {
                self.check_expr(&prefix.operand, &TypeDescriptor::boolean())?;
                Ok(TypeDescriptor::boolean())
            }
            PrefixOperator::Negate => {
                match &prefix.operand.kind {
                    ExprKind::Number(value) if prefix.literal_operand => {
                        let position = prefix.operand.get_span().start.clone();
                        self.check_integer_literal(value, true, position);
                        prefix.operand.set_type(TypeDescriptor::integer())?;
                    }
                    _ => {
                        self.check_expr(&prefix.operand, &TypeDescriptor::integer())?;
                    }
                }
                Ok(TypeDescriptor::integer())
            }
        }
    }

    fn infer_assignment(
        &mut self,
        assignment: &AssignmentExpr,
        position: Position,
    ) -> Result<TypeDescriptor, BindingFault> {
        let target = self.infer_expr(&assignment.assignee)?;

        if is_assignable(&assignment.assignee) {
            self.check_expr(&assignment.value, &target)?;
        } else {
            self.error(ErrorImpl::NotAssignable, position);
            self.infer_expr(&assignment.value)?;
        }

        Ok(target)
    }

    fn infer_arguments(&mut self, arguments: &[Expr]) -> Result<Vec<TypeDescriptor>, BindingFault> {
        arguments
            .iter()
            .map(|argument| self.infer_expr(argument))
            .collect()
    }

    /// The class a member is looked up in, or `None` after reporting why
    /// there is none.
    fn receiver_class(
        &mut self,
        receiver: &TypeDescriptor,
        member: &str,
        position: Position,
    ) -> Result<Option<ClassId>, BindingFault> {
        if receiver.is_unresolved() {
            return Ok(None);
        }

        match receiver.as_class() {
            Some((_, declaration)) => Ok(Some(*declaration.declaration()?)),
            None => {
                self.error(
                    ErrorImpl::NoSuchMember {
                        member: member.to_string(),
                        type_: receiver.to_string(),
                    },
                    position,
                );
                Ok(None)
            }
        }
    }

    fn infer_call(&mut self, call: &CallExpr, position: Position) -> Result<TypeDescriptor, BindingFault> {
        let receiver = match &call.receiver {
            Some(receiver) => self.infer_expr(receiver)?,
            None if self.is_static_context() => {
                self.error(
                    ErrorImpl::StaticContext {
                        name: call.name.clone(),
                    },
                    position.clone(),
                );
                TypeDescriptor::unresolved()
            }
            None => self
                .current_class_type()
                .unwrap_or_else(TypeDescriptor::unresolved),
        };

        let method = match self.receiver_class(&receiver, &call.name, position.clone())? {
            Some(class) => match self.table.lookup_method(class, &call.name) {
                Some(method) => Some(method),
                // The entry point exists but cannot be called
                None if self.table.lookup_static_method(class, &call.name).is_some() => {
                    self.error(
                        ErrorImpl::InaccessibleName {
                            name: call.name.clone(),
                        },
                        position.clone(),
                    );
                    None
                }
                None => {
                    self.error(
                        ErrorImpl::NoSuchMember {
                            member: call.name.clone(),
                            type_: receiver.to_string(),
                        },
                        position.clone(),
                    );
                    None
                }
            },
            None => None,
        };

        let method = match method {
            Some(method) => method,
            None => {
                self.infer_arguments(&call.arguments)?;
                return Ok(TypeDescriptor::unresolved());
            }
        };
        call.method.resolve_to(method)?;

        let table = self.table;
        let declaration = table.method(method);
        let expected = declaration.parameters.len();
        let received = call.arguments.len();

        // The count is known before any argument is looked at
        if received > expected {
            self.error(ErrorImpl::UnexpectedArguments { expected, received }, position.clone());
        } else if received < expected {
            self.error(ErrorImpl::MissingArguments { expected, received }, position.clone());
        }

        let arguments = self.infer_arguments(&call.arguments)?;

        for (argument, parameter) in arguments.iter().zip(declaration.parameters.iter()) {
            if !can_assign(argument, &parameter.ty) && !is_suppressed(argument, &parameter.ty) {
                self.mismatch(&parameter.ty, argument, position.clone());
            }
        }

        Ok(declaration.return_type.clone())
    }

    fn infer_member(
        &mut self,
        member: &MemberExpr,
        position: Position,
    ) -> Result<TypeDescriptor, BindingFault> {
        let object = self.infer_expr(&member.object)?;

        let class = match self.receiver_class(&object, &member.property, position.clone())? {
            Some(class) => class,
            None => return Ok(TypeDescriptor::unresolved()),
        };

        match self.table.lookup_field(class, &member.property) {
            Some(field) => {
                member.field.resolve_to(field)?;
                Ok(self.table.field(field).ty.clone())
            }
            None => {
                self.error(
                    ErrorImpl::NoSuchMember {
                        member: member.property.clone(),
                        type_: object.to_string(),
                    },
                    position,
                );
                Ok(TypeDescriptor::unresolved())
            }
        }
    }

    fn infer_index(&mut self, index: &IndexExpr, position: Position) -> Result<TypeDescriptor, BindingFault> {
        let array = self.infer_expr(&index.array)?;
        self.check_expr(&index.index, &TypeDescriptor::integer())?;

        if array.is_unresolved() {
            return Ok(TypeDescriptor::unresolved());
        }

        match array.element() {
            Some(element) => Ok(element),
            None => {
                self.error(
                    ErrorImpl::TypeMismatch {
                        expected: String::from("array"),
                        received: array.to_string(),
                    },
                    position,
                );
                Ok(TypeDescriptor::unresolved())
            }
        }
    }

    fn infer_new_object(
        &mut self,
        new: &NewObjectExpr,
        position: Position,
    ) -> Result<TypeDescriptor, BindingFault> {
        match self.table.lookup_class(&new.name) {
            Some(class) => {
                new.class.resolve_to(class)?;
                Ok(TypeDescriptor::class(new.name.clone(), class))
            }
            None => {
                self.error(
                    ErrorImpl::UndeclaredType {
                        name: new.name.clone(),
                    },
                    position,
                );
                Ok(TypeDescriptor::unresolved())
            }
        }
    }

    fn infer_new_array(&mut self, new: &NewArrayExpr) -> Result<TypeDescriptor, BindingFault> {
        let ty = self.bind_type(&new.element)?;
        self.check_expr(&new.size, &TypeDescriptor::integer())?;

        if ty.mentions_void() {
            self.error(ErrorImpl::VoidNotAllowed, new.element.span.start.clone());
            return Ok(TypeDescriptor::unresolved());
        }

        Ok(ty)
    }
}

/// Variables, parameters, fields and array elements can be assigned.
///
/// Names that failed to resolve count as assignable so the failure is only
/// reported once.
fn is_assignable(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Symbol(symbol) => !matches!(
            symbol.declaration.declaration(),
            Ok(VariableDecl::Global(_))
        ),
        ExprKind::Member(_) | ExprKind::Index(_) => true,
        _ => false,
    }
}

fn unregistered(name: &str, position: &Position) -> BindingFault {
    BindingFault::Unbound {
        name: name.to_string(),
        position: position.clone(),
    }
}
