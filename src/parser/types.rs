//! Type parsing implementation.
//!
//! This module handles parsing of written types: a basic type (`int`,
//! `boolean`, `void` or a class name) followed by any number of `[]`.
//!
//! Similar to expression parsing, it uses NUD/LED handlers with
//! binding powers.

use std::collections::HashMap;

use crate::{ast::types::SymbolType, errors::errors::Error, lexer::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<SymbolType, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, SymbolType, BindingPower) -> Result<SymbolType, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Int, parse_basic_type);
    parser.type_nud(TokenKind::Boolean, parse_basic_type);
    parser.type_nud(TokenKind::Void, parse_basic_type);
    parser.type_nud(TokenKind::Identifier, parse_basic_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Postfix, parse_array_type);
}

/// Whether the current token can start a type.
pub fn at_basic_type(parser: &Parser) -> bool {
    parser
        .get_type_nud_lookup()
        .contains_key(&parser.current_token_kind())
}

pub fn parse_basic_type(parser: &mut Parser) -> Result<SymbolType, Error> {
    if !at_basic_type(parser) {
        return Err(parser.unexpected_detailed("expected a type"));
    }

    let token = parser.advance().clone();
    Ok(SymbolType::new(token.value, 0, token.span))
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: SymbolType,
    _bp: BindingPower,
) -> Result<SymbolType, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    let span = parser.span_from(left.span.start.clone());
    Ok(SymbolType::new(left.name, left.dimensions + 1, span))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<SymbolType, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected_detailed("expected a type")),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(next_bp) = parser
        .get_type_bp_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_type_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => return Err(parser.unexpected()),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}
