use super::*;
use crate::ast::Node;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, KdlError> {
    let nodes = parse_nodes(parser, false)?;

    // parse_nodes at top level only stops at EOF or an unmatched '}'
    if let Some(tok) = parser.peek() {
        if *tok != Token::Eof {
            return Err(KdlError::TrailingContent {
                token: format!("{:?}", tok),
                line: parser.line(),
                column: parser.column(),
                hint: Some("Unmatched '}' or leftover input after the last node".into()),
                code: Some(206),
            });
        }
    }

    Ok(Document { nodes })
}

/// A sequence of nodes separated by newlines or semicolons. Inside a
/// children block the sequence stops at the closing `}` (left for the
/// caller to consume); at top level a `}` is trailing content.
pub(super) fn parse_nodes(parser: &mut Parser, in_children: bool) -> Result<Vec<Node>, KdlError> {
    let mut nodes = Vec::new();

    while let Some(tok) = parser.peek() {
        match tok {
            Token::Newline | Token::Semicolon => {
                parser.bump()?;
            }
            Token::Eof => {
                if in_children {
                    return Err(KdlError::UnclosedBlock {
                        line: parser.line(),
                        column: parser.column(),
                        hint: Some("A '{' children block was never closed".into()),
                        code: Some(204),
                    });
                }
                break;
            }
            Token::RBrace => {
                // inside children the caller consumes it; at top level
                // parse_document reports it as trailing content
                break;
            }
            Token::Slashdash => {
                // the disabled node must still be syntactically valid
                parser.bump()?;
                node::parse_node(parser)?;
            }
            Token::Ident(_) | Token::String(_) | Token::RawString(_) | Token::LParen => {
                nodes.push(node::parse_node(parser)?);
            }
            _ => {
                return Err(KdlError::InvalidToken {
                    token: format!("{:?}", tok),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Expected a node name".into()),
                    code: Some(205),
                });
            }
        }
    }

    Ok(nodes)
}
