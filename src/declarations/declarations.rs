use std::collections::HashMap;

use crate::{
    ast::ast::NodeId,
    types::descriptor::TypeDescriptor,
    Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalId(pub usize);

/// Built-in type names. None of them have members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Integer,
    Boolean,
    Void,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(PrimitiveType::Integer),
            "boolean" => Some(PrimitiveType::Boolean),
            "void" => Some(PrimitiveType::Void),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            PrimitiveType::Integer => TypeDescriptor::integer(),
            PrimitiveType::Boolean => TypeDescriptor::boolean(),
            PrimitiveType::Void => TypeDescriptor::void(),
        }
    }
}

/// What the element name of a written type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Primitive(PrimitiveType),
    Class(ClassId),
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub name: String,
    pub position: Position,
    pub fields: HashMap<String, FieldId>,
    pub methods: HashMap<String, MethodId>,
    pub static_methods: HashMap<String, MethodId>,
}

#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub name: String,
    pub owner: ClassId,
    pub ty: TypeDescriptor,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Instance,
    /// `public static void main(String[] args)`
    Main,
}

#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub name: String,
    pub ty: TypeDescriptor,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub name: String,
    pub owner: ClassId,
    pub kind: MethodKind,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<ParameterDeclaration>,
    pub position: Position,
}

impl MethodDeclaration {
    pub fn is_static(&self) -> bool {
        self.kind == MethodKind::Main
    }
}

/// A variable visible in every class, like `System`.
#[derive(Debug, Clone)]
pub struct GlobalDeclaration {
    pub name: String,
    pub ty: TypeDescriptor,
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct DeclarationTable {
    classes: Vec<ClassDeclaration>,
    fields: Vec<FieldDeclaration>,
    methods: Vec<MethodDeclaration>,
    globals: Vec<GlobalDeclaration>,
    class_lookup: HashMap<String, ClassId>,
    global_lookup: HashMap<String, GlobalId>,
    class_nodes: HashMap<NodeId, ClassId>,
    method_nodes: HashMap<NodeId, MethodId>,
    entry_point: Option<MethodId>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        DeclarationTable::default()
    }

    pub fn class(&self, id: ClassId) -> &ClassDeclaration {
        &self.classes[id.0]
    }

    pub fn field(&self, id: FieldId) -> &FieldDeclaration {
        &self.fields[id.0]
    }

    pub fn method(&self, id: MethodId) -> &MethodDeclaration {
        &self.methods[id.0]
    }

    pub fn global(&self, id: GlobalId) -> &GlobalDeclaration {
        &self.globals[id.0]
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDeclaration)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index), class))
    }

    pub fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.class_lookup.get(name).copied()
    }

    pub fn lookup_global(&self, name: &str) -> Option<GlobalId> {
        self.global_lookup.get(name).copied()
    }

    pub fn lookup_field(&self, class: ClassId, name: &str) -> Option<FieldId> {
        self.class(class).fields.get(name).copied()
    }

    pub fn lookup_method(&self, class: ClassId, name: &str) -> Option<MethodId> {
        self.class(class).methods.get(name).copied()
    }

    pub fn lookup_static_method(&self, class: ClassId, name: &str) -> Option<MethodId> {
        self.class(class).static_methods.get(name).copied()
    }

    /// Class declared by the syntax node `node`.
    pub fn class_for_node(&self, node: NodeId) -> Option<ClassId> {
        self.class_nodes.get(&node).copied()
    }

    /// Method declared by the syntax node `node`.
    pub fn method_for_node(&self, node: NodeId) -> Option<MethodId> {
        self.method_nodes.get(&node).copied()
    }

    pub fn entry_point(&self) -> Option<MethodId> {
        self.entry_point
    }

    /// Resolves the element name of a written type. Primitive names win.
    pub fn lookup_basic_type(&self, name: &str) -> Option<BasicType> {
        PrimitiveType::from_name(name)
            .map(BasicType::Primitive)
            .or_else(|| self.lookup_class(name).map(BasicType::Class))
    }

    /// Descriptor for `basic` nested `dimension` times.
    pub fn descriptor(&self, basic: BasicType, dimension: u32) -> TypeDescriptor {
        match basic {
            BasicType::Primitive(primitive) => primitive.descriptor().array_of(dimension),
            BasicType::Class(id) => {
                TypeDescriptor::class(self.class(id).name.clone(), id).array_of(dimension)
            }
        }
    }

    /// Descriptor for a written type, `Unresolved` when the name is unknown.
    pub fn descriptor_for_name(&self, name: &str, dimension: u32) -> TypeDescriptor {
        match self.lookup_basic_type(name) {
            Some(basic) => self.descriptor(basic, dimension),
            None => TypeDescriptor::unresolved(),
        }
    }

    /// Registers a class. A duplicate name keeps the first declaration in
    /// the name lookup, but the node still maps to its own record.
    pub(crate) fn add_class(&mut self, name: &str, position: Position, node: Option<NodeId>) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.push(ClassDeclaration {
            name: name.to_string(),
            position,
            fields: HashMap::new(),
            methods: HashMap::new(),
            static_methods: HashMap::new(),
        });
        self.class_lookup.entry(name.to_string()).or_insert(id);
        if let Some(node) = node {
            self.class_nodes.insert(node, id);
        }
        id
    }

    pub(crate) fn add_field(&mut self, field: FieldDeclaration) -> FieldId {
        let id = FieldId(self.fields.len());
        self.classes[field.owner.0]
            .fields
            .insert(field.name.clone(), id);
        self.fields.push(field);
        id
    }

    pub(crate) fn add_method(&mut self, method: MethodDeclaration, node: Option<NodeId>) -> MethodId {
        let id = MethodId(self.methods.len());
        let owner = &mut self.classes[method.owner.0];
        let lookup = match method.kind {
            MethodKind::Instance => &mut owner.methods,
            MethodKind::Main => &mut owner.static_methods,
        };
        lookup.entry(method.name.clone()).or_insert(id);
        if let Some(node) = node {
            self.method_nodes.insert(node, id);
        }
        self.methods.push(method);
        id
    }

    pub(crate) fn add_global(&mut self, global: GlobalDeclaration) -> GlobalId {
        let id = GlobalId(self.globals.len());
        self.global_lookup.insert(global.name.clone(), id);
        self.globals.push(global);
        id
    }

    pub(crate) fn set_entry_point(&mut self, method: MethodId) {
        self.entry_point = Some(method);
    }
}
