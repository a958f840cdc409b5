use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("public", TokenKind::Public);
        map.insert("static", TokenKind::Static);
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("new", TokenKind::New);
        map.insert("this", TokenKind::This);
        map.insert("null", TokenKind::Null);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);

        // Java keywords that have no meaning here but can't be identifiers
        for keyword in [
            "abstract", "assert", "break", "byte", "case", "catch", "char", "const",
            "continue", "default", "do", "double", "enum", "extends", "final", "finally",
            "float", "for", "goto", "implements", "import", "instanceof", "interface",
            "long", "native", "package", "private", "protected", "short", "strictfp",
            "super", "switch", "synchronized", "throw", "throws", "transient", "try",
            "volatile",
        ] {
            map.insert(keyword, TokenKind::Reserved);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    Tilde,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Class,
    Public,
    Static,
    Void,
    Int,
    Boolean,
    If,
    Else,
    While,
    Return,
    New,
    This,
    Null,
    True,
    False,
    /// Java keyword not used by the language
    Reserved,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
