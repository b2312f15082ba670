use std::fmt;

use crate::ast::{Base, Number, Value};

/// Failure to convert well-formed token text into a typed value.
///
/// Carries only a reason; the lexer attaches line/column information when it
/// surfaces one of these as a [`crate::KdlError`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    pub reason: String,
}

impl DecodeError {
    fn new(reason: impl Into<String>) -> Self {
        DecodeError { reason: reason.into() }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Resolve escape sequences in the body of a quoted string.
///
/// Raw strings never pass through here; their content is taken verbatim.
pub fn decode_string(raw: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let escape = chars.next().ok_or_else(|| {
            DecodeError::new("trailing backslash in string literal")
        })?;

        match escape {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '/' => out.push('/'),
            'u' => out.push(decode_unicode_escape(&mut chars)?),
            other => {
                return Err(DecodeError::new(format!("unknown escape '\\{}'", other)));
            }
        }
    }

    Ok(out)
}

fn decode_unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, DecodeError> {
    if chars.next() != Some('{') {
        return Err(DecodeError::new("expected '{' after '\\u'"));
    }

    let mut hex = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some(c) if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
            Some(c) => {
                return Err(DecodeError::new(format!(
                    "invalid character '{}' in unicode escape", c
                )));
            }
            None => return Err(DecodeError::new("unterminated unicode escape")),
        }
    }

    if hex.is_empty() {
        return Err(DecodeError::new("empty unicode escape"));
    }

    let code = u32::from_str_radix(&hex, 16)
        .map_err(|_| DecodeError::new(format!("invalid unicode escape '\\u{{{}}}'", hex)))?;

    char::from_u32(code).ok_or_else(|| {
        DecodeError::new(format!("\\u{{{}}} is not a valid code point", hex))
    })
}

/// Decode a numeric literal: decimal integers and floats, or `0x`/`0o`/`0b`
/// integers, with optional sign and grouping underscores.
pub fn decode_number(text: &str) -> Result<Number, DecodeError> {
    let (sign, body) = split_sign(text);

    if let Some(digits) = body.strip_prefix("0x") {
        return decode_radix(sign, digits, 16, Base::Hex, text);
    }
    if let Some(digits) = body.strip_prefix("0o") {
        return decode_radix(sign, digits, 8, Base::Octal, text);
    }
    if let Some(digits) = body.strip_prefix("0b") {
        return decode_radix(sign, digits, 2, Base::Binary, text);
    }

    check_separators(body, 10)?;
    let cleaned = format!("{}{}", sign, body.replace('_', ""));

    if body.contains(['.', 'e', 'E']) {
        let value = cleaned.parse::<f64>().map_err(|_| {
            DecodeError::new(format!("invalid float literal '{}'", text))
        })?;
        return Ok(Number::Float { value });
    }

    let value = cleaned.parse::<i64>().map_err(|e| {
        DecodeError::new(format!("invalid integer literal '{}': {}", text, e))
    })?;
    Ok(Number::Integer { value, base: Base::Decimal })
}

fn decode_radix(
    sign: &str,
    digits: &str,
    radix: u32,
    base: Base,
    original: &str,
) -> Result<Number, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::new(format!(
            "number literal '{}' has no digits", original
        )));
    }

    check_separators(digits, radix)?;
    let cleaned = format!("{}{}", sign, digits.replace('_', ""));

    let value = i64::from_str_radix(&cleaned, radix).map_err(|e| {
        DecodeError::new(format!("invalid integer literal '{}': {}", original, e))
    })?;
    Ok(Number::Integer { value, base })
}

/// Keyword literals: `true`, `false`, `null`.
pub fn decode_keyword(text: &str) -> Option<Value> {
    match text {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Null),
        _ => None,
    }
}

fn split_sign(text: &str) -> (&str, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("", rest)
    } else {
        ("", text)
    }
}

/// Every grouping underscore must sit between two digits of the base.
/// Rejects leading, trailing, and doubled separators.
fn check_separators(text: &str, radix: u32) -> Result<(), DecodeError> {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        let ok = matches!(before, Some(b) if b.is_digit(radix))
            && matches!(after, Some(a) if a.is_digit(radix));
        if !ok {
            return Err(DecodeError::new(format!(
                "misplaced grouping separator in '{}'", text
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_integers() {
        assert_eq!(decode_number("42"), Ok(Number::Integer { value: 42, base: Base::Decimal }));
        assert_eq!(decode_number("-7"), Ok(Number::Integer { value: -7, base: Base::Decimal }));
        assert_eq!(decode_number("1_000_000"),
            Ok(Number::Integer { value: 1_000_000, base: Base::Decimal }));
    }

    #[test]
    fn test_alternate_bases() {
        assert_eq!(decode_number("0x1A"), Ok(Number::Integer { value: 26, base: Base::Hex }));
        assert_eq!(decode_number("0o17"), Ok(Number::Integer { value: 15, base: Base::Octal }));
        assert_eq!(decode_number("0b101"), Ok(Number::Integer { value: 5, base: Base::Binary }));
        assert_eq!(decode_number("-0x10"), Ok(Number::Integer { value: -16, base: Base::Hex }));
        assert_eq!(decode_number("0xDE_AD"),
            Ok(Number::Integer { value: 0xDEAD, base: Base::Hex }));
    }

    #[test]
    fn test_floats() {
        assert_eq!(decode_number("-3.14"), Ok(Number::Float { value: -3.14 }));
        assert_eq!(decode_number("1e10"), Ok(Number::Float { value: 1e10 }));
        assert_eq!(decode_number("2.5E-3"), Ok(Number::Float { value: 2.5e-3 }));
        assert_eq!(decode_number("1_234.5"), Ok(Number::Float { value: 1234.5 }));
    }

    #[test]
    fn test_prefix_without_digits_is_rejected() {
        assert!(decode_number("0x").is_err());
        assert!(decode_number("0b").is_err());
        assert!(decode_number("0o").is_err());
    }

    #[test]
    fn test_misplaced_separators_are_rejected() {
        assert!(decode_number("1__0").is_err());
        assert!(decode_number("1_").is_err());
        assert!(decode_number("0x_1").is_err());
        assert!(decode_number("1_.5").is_err());
    }

    #[test]
    fn test_invalid_digits_are_rejected() {
        assert!(decode_number("0b2").is_err());
        assert!(decode_number("0o9").is_err());
        assert!(decode_number("12ab").is_err());
        assert!(decode_number("1.2.3").is_err());
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        assert!(decode_number("9223372036854775808").is_err());
        assert!(decode_number("0xFFFFFFFFFFFFFFFF").is_err());
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(decode_string(r#"a\nb\tc"#), Ok("a\nb\tc".to_string()));
        assert_eq!(decode_string(r#"\\ \" \'"#), Ok("\\ \" '".to_string()));
        assert_eq!(decode_string(r#"\u{1F600}"#), Ok("\u{1F600}".to_string()));
        assert_eq!(decode_string("plain"), Ok("plain".to_string()));
    }

    #[test]
    fn test_bad_escapes_are_rejected() {
        assert!(decode_string(r#"\q"#).is_err());
        assert!(decode_string(r#"\u{D800}"#).is_err());
        assert!(decode_string(r#"\u{}"#).is_err());
        assert!(decode_string("tail\\").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(decode_keyword("true"), Some(Value::Bool(true)));
        assert_eq!(decode_keyword("false"), Some(Value::Bool(false)));
        assert_eq!(decode_keyword("null"), Some(Value::Null));
        assert_eq!(decode_keyword("nil"), None);
    }
}
