use super::*;
use crate::ast::{Node, Number, Value};

/// One argument-or-property unit after a node name. Parsed the same way
/// whether it is kept or slashdash-discarded.
enum Entry {
    Arg(Value),
    Prop(String, Value),
    Children(Document),
}

pub(super) fn parse_node(parser: &mut Parser) -> Result<Node, KdlError> {
    let type_annotation = if parser.peek() == Some(&Token::LParen) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let name = match parser.bump()? {
        Token::Ident(s) | Token::String(s) | Token::RawString(s) => s,
        tok => {
            return Err(KdlError::InvalidToken {
                token: format!("{:?}", tok),
                line: parser.line(),
                column: parser.column(),
                hint: Some("Expected a node name".into()),
                code: Some(205),
            });
        }
    };

    let mut node = Node::new(name);
    node.type_annotation = type_annotation;

    loop {
        match parser.peek() {
            Some(Token::Newline) | Some(Token::Semicolon) => {
                parser.bump()?;
                break;
            }
            Some(Token::Eof) | Some(Token::RBrace) | None => break,
            Some(Token::Slashdash) => {
                if node.children.is_some() {
                    return Err(entry_after_children_error(parser));
                }
                // still parsed for syntax validation, then dropped
                parser.bump()?;
                parse_entry(parser)?;
            }
            Some(Token::LBrace) if node.children.is_some() => {
                return Err(KdlError::SyntaxError {
                    message: "Node already has a children block".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: None,
                    code: Some(209),
                });
            }
            Some(_) => {
                if node.children.is_some() {
                    return Err(entry_after_children_error(parser));
                }
                match parse_entry(parser)? {
                    Entry::Arg(v) => node.arguments.push(v),
                    Entry::Prop(k, v) => {
                        // later occurrence overwrites, key keeps its
                        // first-seen position
                        node.properties.insert(k, v);
                    }
                    Entry::Children(doc) => node.children = Some(doc),
                }
            }
        }
    }

    Ok(node)
}

fn entry_after_children_error(parser: &Parser) -> KdlError {
    KdlError::SyntaxError {
        message: "Arguments and properties must precede the children block".into(),
        line: parser.line(),
        column: parser.column(),
        hint: None,
        code: Some(209),
    }
}

fn parse_type_annotation(parser: &mut Parser) -> Result<String, KdlError> {
    parser.bump()?; // consume '('

    let ty = match parser.bump()? {
        Token::Ident(s) | Token::String(s) | Token::RawString(s) => s,
        tok => {
            return Err(KdlError::SyntaxError {
                message: format!("Expected a type name inside '(...)', got {:?}", tok),
                line: parser.line(),
                column: parser.column(),
                hint: None,
                code: Some(203),
            });
        }
    };

    parser.expect(Token::RParen)?;
    Ok(ty)
}

/// Disambiguate argument vs. property with one token of lookahead: bump
/// a value-shaped token, and if `=` follows it was a property key.
fn parse_entry(parser: &mut Parser) -> Result<Entry, KdlError> {
    if parser.peek() == Some(&Token::LBrace) {
        return Ok(Entry::Children(parse_children(parser)?));
    }

    let token = parser.bump()?;

    if parser.peek() == Some(&Token::Equals) {
        let key = match property_key(&token) {
            Some(k) => k,
            None => {
                return Err(KdlError::InvalidToken {
                    token: format!("{:?}", token),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Property keys are identifiers or strings".into()),
                    code: Some(207),
                });
            }
        };
        parser.bump()?; // consume '='
        let value = parse_value(parser)?;
        return Ok(Entry::Prop(key, value));
    }

    match token {
        Token::String(s) | Token::RawString(s) => Ok(Entry::Arg(Value::String(s))),
        Token::Number(n) => Ok(Entry::Arg(Value::Number(n))),
        Token::Bool(b) => Ok(Entry::Arg(Value::Bool(b))),
        Token::Null => Ok(Entry::Arg(Value::Null)),
        tok => Err(KdlError::InvalidToken {
            token: format!("{:?}", tok),
            line: parser.line(),
            column: parser.column(),
            hint: Some("A bare word is not a value; quote it or add '='".into()),
            code: Some(208),
        }),
    }
}

/// The literal text a token contributes when used as a property key.
/// Keywords lex as `Bool`/`Null` tokens, so `true=1` keys on "true".
fn property_key(token: &Token) -> Option<String> {
    match token {
        Token::Ident(s) | Token::String(s) | Token::RawString(s) => Some(s.clone()),
        Token::Bool(true) => Some("true".to_string()),
        Token::Bool(false) => Some("false".to_string()),
        Token::Null => Some("null".to_string()),
        Token::Number(Number::Integer { value, .. }) => Some(value.to_string()),
        Token::Number(Number::Float { value }) => Some(value.to_string()),
        _ => None,
    }
}

fn parse_value(parser: &mut Parser) -> Result<Value, KdlError> {
    match parser.bump()? {
        Token::String(s) | Token::RawString(s) => Ok(Value::String(s)),
        Token::Number(n) => Ok(Value::Number(n)),
        Token::Bool(b) => Ok(Value::Bool(b)),
        Token::Null => Ok(Value::Null),
        tok => Err(KdlError::InvalidToken {
            token: format!("{:?}", tok),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Expected a value after '='".into()),
            code: Some(210),
        }),
    }
}

fn parse_children(parser: &mut Parser) -> Result<Document, KdlError> {
    parser.bump()?; // consume '{'

    parser.depth += 1;
    if parser.depth > MAX_DEPTH {
        return Err(KdlError::NestingTooDeep {
            depth: MAX_DEPTH,
            line: parser.line(),
            column: parser.column(),
            hint: Some("Flatten the document below the nesting limit".into()),
            code: Some(214),
        });
    }

    let nodes = document::parse_nodes(parser, true)?;
    parser.expect(Token::RBrace)?;
    parser.depth -= 1;

    Ok(Document { nodes })
}
