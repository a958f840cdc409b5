use crate::{binding::binding::Binding, declarations::declarations::BasicType, Span};

/// A type as written: element name plus `[]` count.
///
/// The element name is bound by the resolution pass.
#[derive(Debug, Clone)]
pub struct SymbolType {
    pub name: String,
    pub dimensions: u32,
    pub span: Span,
    pub declaration: Binding<BasicType>,
}

impl SymbolType {
    pub fn new(name: impl Into<String>, dimensions: u32, span: Span) -> Self {
        let name = name.into();
        SymbolType {
            declaration: Binding::explicit(name.clone(), span.start.clone()),
            name,
            dimensions,
            span,
        }
    }
}
