use crate::{
    ast::{
        expressions::{
            AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr, ExprKind, IndexExpr,
            MemberExpr, NewArrayExpr, NewObjectExpr, PrefixExpr, PrefixOperator, SymbolExpr,
        },
        types::SymbolType,
    },
    binding::binding::Binding,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_basic_type};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected()),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(next_bp) = parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => return Err(parser.unexpected()),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let kind = match token.kind {
        TokenKind::Number => ExprKind::Number(token.value),
        TokenKind::True => ExprKind::Boolean(true),
        TokenKind::False => ExprKind::Boolean(false),
        TokenKind::Null => ExprKind::Null,
        TokenKind::This => ExprKind::This,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span.start,
            ))
        }
    };

    Ok(Expr::new(kind, token.span))
}

/// A bare name, or a call on the implicit `this` when followed by `(`.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        let arguments = parse_arguments(parser)?;
        return Ok(Expr::new(
            ExprKind::Call(CallExpr {
                receiver: None,
                method: Binding::explicit(token.value.clone(), token.span.start.clone()),
                name: token.value,
                arguments,
            }),
            parser.span_from(token.span.start),
        ));
    }

    Ok(Expr::new(
        ExprKind::Symbol(SymbolExpr {
            declaration: Binding::explicit(token.value.clone(), token.span.start.clone()),
            value: token.value,
        }),
        token.span,
    ))
}

/// `( [expr {, expr}] )`
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(arguments)
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::Or => BinaryOperator::Or,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Equals => BinaryOperator::Equals,
        TokenKind::NotEquals => BinaryOperator::NotEquals,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEquals => BinaryOperator::LessEquals,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Dash => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Percent => BinaryOperator::Modulo,
        _ => return None,
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match binary_operator(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected()),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;
    let span = parser.span_from(left.span.start.clone());

    Ok(Expr::new(
        ExprKind::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }),
        span,
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = match operator_token.kind {
        TokenKind::Not => PrefixOperator::Not,
        _ => PrefixOperator::Negate,
    };

    let literal_operand = parser.current_token_kind() == TokenKind::Number;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::new(
        ExprKind::Prefix(PrefixExpr {
            operator,
            operand: Box::new(operand),
            literal_operand,
        }),
        parser.span_from(operator_token.span.start),
    ))
}

/// Right associative: `a = b = c` assigns `c` to `b` first.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let span = parser.span_from(left.span.start.clone());

    Ok(Expr::new(
        ExprKind::Assignment(AssignmentExpr {
            assignee: Box::new(left),
            value: Box::new(value),
        }),
        span,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `.field` or `.method(arguments)`
pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::Dot)?;
    let name = parser.expect(TokenKind::Identifier)?;
    let start = left.span.start.clone();

    if parser.current_token_kind() == TokenKind::OpenParen {
        let arguments = parse_arguments(parser)?;
        return Ok(Expr::new(
            ExprKind::Call(CallExpr {
                receiver: Some(Box::new(left)),
                method: Binding::explicit(name.value.clone(), name.span.start.clone()),
                name: name.value,
                arguments,
            }),
            parser.span_from(start),
        ));
    }

    Ok(Expr::new(
        ExprKind::Member(MemberExpr {
            object: Box::new(left),
            field: Binding::explicit(name.value.clone(), name.span.start.clone()),
            property: name.value,
        }),
        parser.span_from(start),
    ))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;
    let span = parser.span_from(left.span.start.clone());

    Ok(Expr::new(
        ExprKind::Index(IndexExpr {
            array: Box::new(left),
            index: Box::new(index),
        }),
        span,
    ))
}

/// `new Name()` or `new BasicType[size]([])*`
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::New)?.span.start;

    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek(1).kind == TokenKind::OpenParen
    {
        let name = parser.advance().clone();
        parser.expect(TokenKind::OpenParen)?;
        parser.expect(TokenKind::CloseParen)?;

        return Ok(Expr::new(
            ExprKind::NewObject(NewObjectExpr {
                class: Binding::explicit(name.value.clone(), name.span.start.clone()),
                name: name.value,
            }),
            parser.span_from(start),
        ));
    }

    let basic = parse_basic_type(parser)?;
    parser.expect(TokenKind::OpenBracket)?;
    let size = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    let mut dimensions = 1;
    while parser.current_token_kind() == TokenKind::OpenBracket
        && parser.peek(1).kind == TokenKind::CloseBracket
    {
        parser.advance();
        parser.advance();
        dimensions += 1;
    }

    Ok(Expr::new(
        ExprKind::NewArray(NewArrayExpr {
            element: SymbolType::new(basic.name, dimensions, basic.span),
            size: Box::new(size),
        }),
        parser.span_from(start),
    ))
}
