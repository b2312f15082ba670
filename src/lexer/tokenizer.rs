use super::*;
use super::scanner::{bump, peek_second, skip_whitespace_and_comments};
use crate::decode;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, KdlError> {
    skip_whitespace_and_comments(lexer)?;

    match lexer.peek {
        Some('\n') => tokenize_symbol(lexer, Token::Newline),
        Some(';') => tokenize_symbol(lexer, Token::Semicolon),
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('(') => tokenize_symbol(lexer, Token::LParen),
        Some(')') => tokenize_symbol(lexer, Token::RParen),
        Some('=') => tokenize_symbol(lexer, Token::Equals),
        // line and block comments were skipped above, so a surviving '/'
        // can only start a slashdash marker
        Some('/') => tokenize_slashdash(lexer),
        Some('r') if matches!(peek_second(lexer), Some('"') | Some('#')) => {
            tokenize_raw_string(lexer)
        }
        Some('"') => tokenize_quoted_string(lexer),
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer),
        Some('+') | Some('-') if matches!(peek_second(lexer), Some(c) if c.is_ascii_digit()) => {
            tokenize_number(lexer)
        }
        Some(c) if c.is_alphabetic() || c == '_' => tokenize_identifier_or_keyword(lexer),
        Some(ch) => tokenize_unexpected_char(lexer, ch),
        None => Ok(Token::Eof),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, KdlError> {
    bump(lexer);
    Ok(token)
}

fn tokenize_slashdash(lexer: &mut Lexer) -> Result<Token, KdlError> {
    // record where the '/' itself sits before consuming it
    let (line, column) = (lexer.line, lexer.column);
    bump(lexer); // consume '/'
    if lexer.peek == Some('-') {
        bump(lexer);
        Ok(Token::Slashdash)
    } else {
        Err(KdlError::UnexpectedCharacter {
            character: '/',
            line,
            column,
            hint: Some("Did you mean '//', '/*', or '/-'?".into()),
            code: Some(104),
        })
    }
}

fn tokenize_quoted_string(lexer: &mut Lexer) -> Result<Token, KdlError> {
    bump(lexer); // consume opening '"'
    let mut raw = String::new();

    loop {
        match lexer.peek {
            Some('"') => {
                bump(lexer);
                break;
            }
            Some('\\') => {
                // keep the escape intact; the decoder resolves it
                raw.push('\\');
                bump(lexer);
                match bump(lexer) {
                    Some(next_ch) => raw.push(next_ch),
                    None => {
                        return Err(KdlError::UnclosedString {
                            quote: '"',
                            line: lexer.line,
                            column: lexer.column,
                            hint: Some("Trailing backslash in string".into()),
                            code: Some(103),
                        });
                    }
                }
            }
            Some(ch) => {
                raw.push(ch);
                bump(lexer);
            }
            None => {
                return Err(KdlError::UnclosedString {
                    quote: '"',
                    line: lexer.line,
                    column: lexer.column,
                    hint: Some("String literal not closed".into()),
                    code: Some(103),
                });
            }
        }
    }

    let content = decode::decode_string(&raw).map_err(|e| KdlError::InvalidEscape {
        message: e.reason,
        line: lexer.line,
        column: lexer.column,
        hint: None,
        code: Some(105),
    })?;

    Ok(Token::String(content))
}

/// Raw strings `r"..."` with an optional counted hash delimiter
/// (`r#"..."#`, `r##"..."##`, ...). No escape processing.
fn tokenize_raw_string(lexer: &mut Lexer) -> Result<Token, KdlError> {
    bump(lexer); // consume 'r'

    let mut hashes = 0usize;
    while lexer.peek == Some('#') {
        bump(lexer);
        hashes += 1;
    }

    if lexer.peek != Some('"') {
        return Err(KdlError::SyntaxError {
            message: "Expected '\"' after raw string delimiter".into(),
            line: lexer.line,
            column: lexer.column,
            hint: Some("Raw strings look like r\"...\" or r#\"...\"#".into()),
            code: Some(106),
        });
    }
    bump(lexer); // consume opening '"'

    let mut content = String::new();
    loop {
        match bump(lexer) {
            Some('"') => {
                let mut seen = 0usize;
                while seen < hashes && lexer.peek == Some('#') {
                    bump(lexer);
                    seen += 1;
                }
                if seen == hashes {
                    break;
                }
                // a quote with too few hashes is still content
                content.push('"');
                content.extend(std::iter::repeat('#').take(seen));
            }
            Some(ch) => content.push(ch),
            None => {
                return Err(KdlError::UnclosedString {
                    quote: '"',
                    line: lexer.line,
                    column: lexer.column,
                    hint: Some(format!(
                        "Raw string needs '\"' followed by {} '#' to close", hashes
                    )),
                    code: Some(103),
                });
            }
        }
    }

    Ok(Token::RawString(content))
}

fn tokenize_number(lexer: &mut Lexer) -> Result<Token, KdlError> {
    let mut text = String::new();
    let mut prev = bump(lexer).unwrap(); // sign or first digit
    text.push(prev);

    while let Some(ch) = lexer.peek {
        let continues = ch.is_ascii_alphanumeric()
            || ch == '_'
            || ch == '.'
            || ((ch == '+' || ch == '-') && matches!(prev, 'e' | 'E'));
        if !continues {
            break;
        }
        text.push(ch);
        prev = ch;
        bump(lexer);
    }

    decode::decode_number(&text)
        .map(Token::Number)
        .map_err(|e| KdlError::InvalidNumber {
            message: e.reason,
            line: lexer.line,
            column: lexer.column,
            hint: None,
            code: Some(102),
        })
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Result<Token, KdlError> {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '.' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    let token = match decode::decode_keyword(&ident) {
        Some(crate::ast::Value::Bool(b)) => Token::Bool(b),
        Some(_) => Token::Null,
        None => Token::Ident(ident),
    };

    Ok(token)
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<Token, KdlError> {
    let (line, column) = (lexer.line, lexer.column);
    bump(lexer);
    Err(KdlError::UnexpectedCharacter {
        character: ch,
        line,
        column,
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    })
}
