use super::*;

/// Advance the character iterator and update line/column tracking.
/// Both coordinates are 1-based and point at the next unconsumed char.
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Look one character past the pending one without consuming anything
pub(super) fn peek_second(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Skip insignificant whitespace and comments.
///
/// Newlines are significant terminators and are left for the tokenizer.
/// `/-` is a slashdash marker, not a comment, and is also left in place.
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) -> Result<(), KdlError> {
    while let Some(c) = lexer.peek {
        match c {
            ' ' | '\t' | '\r' => {
                bump(lexer);
            }
            '/' => match peek_second(lexer) {
                Some('/') => skip_line_comment(lexer),
                Some('*') => skip_block_comment(lexer)?,
                _ => break,
            },
            _ => break,
        }
    }
    Ok(())
}

/// Skip `//` up to, but not through, the terminating newline. The newline
/// still ends the current node.
fn skip_line_comment(lexer: &mut Lexer) {
    while let Some(ch) = lexer.peek {
        if ch == '\n' {
            break;
        }
        bump(lexer);
    }
}

/// Skip a `/* ... */` comment, tracking nesting depth. Every inner opener
/// needs its own closer.
fn skip_block_comment(lexer: &mut Lexer) -> Result<(), KdlError> {
    bump(lexer); // consume '/'
    bump(lexer); // consume '*'
    let mut depth = 1usize;

    while depth > 0 {
        match bump(lexer) {
            Some('/') if lexer.peek == Some('*') => {
                bump(lexer);
                depth += 1;
            }
            Some('*') if lexer.peek == Some('/') => {
                bump(lexer);
                depth -= 1;
            }
            Some(_) => {}
            None => {
                return Err(KdlError::UnclosedComment {
                    line: lexer.line,
                    column: lexer.column,
                    hint: Some("Block comments nest; every '/*' needs its own '*/'".into()),
                    code: Some(101),
                });
            }
        }
    }

    Ok(())
}
