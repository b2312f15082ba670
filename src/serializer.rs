use std::fmt::Write;

use crate::ast::{Document, Node, Number, Value};

/// Indentation unit per nesting depth. Presentation policy only; the
/// grammar itself does not care about indentation.
const INDENT: &str = "    ";

/// Render a document in canonical form.
///
/// Policy: one node per line, arguments in source order, properties in
/// first-seen order, children in a braced block at one deeper indent.
/// Numbers render in decimal regardless of source radix, so re-parsing
/// yields a structurally equal document rather than identical text.
/// Non-empty output ends with a trailing newline; an empty document
/// renders as empty text.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        write_node(&mut out, node, 0);
        out.push('\n');
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    if let Some(ty) = &node.type_annotation {
        out.push('(');
        write_identifier(out, ty);
        out.push(')');
    }
    write_identifier(out, &node.name);

    for arg in &node.arguments {
        out.push(' ');
        write_value(out, arg);
    }

    for (key, value) in &node.properties {
        out.push(' ');
        write_identifier(out, key);
        out.push('=');
        write_value(out, value);
    }

    if let Some(children) = &node.children {
        out.push_str(" {\n");
        for child in &children.nodes {
            write_node(out, child, depth + 1);
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('}');
    }
}

/// Bare if the lexer would read it back as a single identifier token,
/// quoted otherwise.
fn write_identifier(out: &mut String, name: &str) {
    if is_bare_identifier(name) {
        out.push_str(name);
    } else {
        write_quoted(out, name);
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => write_quoted(out, s),
        Value::Number(n) => write_number(out, n),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Null => out.push_str("null"),
    }
}

fn write_number(out: &mut String, number: &Number) {
    match number {
        Number::Integer { value, .. } => {
            let _ = write!(out, "{}", value);
        }
        Number::Float { value } => {
            if !value.is_finite() {
                // no literal form exists for NaN/infinity
                out.push_str("null");
            } else if value.abs() >= 1e15 {
                // plain formatting would print bare digits that re-lex
                // as an integer (or overflow one); exponent form keeps
                // the value a float literal
                let _ = write!(out, "{:e}", value);
            } else if value.fract() == 0.0 {
                let _ = write!(out, "{:.1}", value);
            } else {
                let _ = write!(out, "{}", value);
            }
        }
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Must mirror the lexer's identifier rules so serialized names re-lex as
/// a single token.
fn is_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !matches!(s, "true" | "false" | "null")
}
