//! Class and member declarations.

use crate::{
    ast::ast::{ClassDecl, FieldDecl, MainMethodDecl, MemberDecl, MethodDecl, ParameterDecl},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block, types::parse_type};

/// `class ID { Member* }`
pub fn parse_class_decl(parser: &mut Parser) -> Result<ClassDecl, Error> {
    let start = parser.expect(TokenKind::Class)?.span.start;
    let name = parser.expect(TokenKind::Identifier)?.value;
    let id = parser.advance_id();

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected_detailed("class body is never closed"));
        }
        members.push(parse_member(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(ClassDecl {
        id,
        name,
        members,
        span: parser.span_from(start),
    })
}

fn parse_member(parser: &mut Parser) -> Result<MemberDecl, Error> {
    let start = parser.expect(TokenKind::Public)?.span.start;

    if parser.current_token_kind() == TokenKind::Static {
        return Ok(MemberDecl::MainMethod(parse_main_method(parser, start)?));
    }

    let ty = parse_type(parser, BindingPower::Default)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(MemberDecl::Field(FieldDecl {
                ty,
                name,
                span: parser.span_from(start),
            }))
        }
        TokenKind::OpenParen => {
            let id = parser.advance_id();
            let parameters = parse_parameters(parser)?;
            let body = parse_block(parser)?;

            Ok(MemberDecl::Method(MethodDecl {
                id,
                return_type: ty,
                name,
                parameters,
                body,
                span: parser.span_from(start),
            }))
        }
        _ => Err(parser.unexpected_detailed("expected `;` or `(`")),
    }
}

/// `static void ID ( String [ ] ID ) Block`, after `public`
fn parse_main_method(parser: &mut Parser, start: Position) -> Result<MainMethodDecl, Error> {
    parser.expect(TokenKind::Static)?;
    parser.expect(TokenKind::Void)?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    let id = parser.advance_id();

    parser.expect(TokenKind::OpenParen)?;
    if parser.current_token_kind() != TokenKind::Identifier
        || parser.current_token().value != "String"
    {
        return Err(parser.unexpected_detailed("expected `String`"));
    }
    parser.advance();
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;
    let parameter = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(MainMethodDecl {
        id,
        name,
        parameter: parameter.value,
        parameter_span: parameter.span,
        body,
        span: parser.span_from(start),
    })
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<ParameterDecl>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let start = parser.get_position();
            let ty = parse_type(parser, BindingPower::Default)?;
            let name = parser.expect(TokenKind::Identifier)?.value;

            parameters.push(ParameterDecl {
                ty,
                name,
                span: parser.span_from(start),
            });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}
