use std::fs;

use serde_json::json;

use crate::KdlError;
use crate::ast::{Document, Node, Number, Value};
use crate::parser::Parser;

/// Export a KDL document to JSON format.
///
/// Converts all KDL values to their JSON equivalents:
/// - Strings, booleans → direct mapping
/// - Integers → JSON integers, floats → JSON numbers
/// - Null → JSON null
///
/// Each node becomes an object with its name, optional type annotation,
/// arguments, properties, and children. Tree shape and ordering are
/// preserved; the source radix of integers is not.
pub fn document_to_json(doc: &Document) -> String {
    fn value_to_json(v: &Value) -> serde_json::Value {
        match v {
            Value::String(s) => json!(s),
            Value::Number(Number::Integer { value, .. }) => json!(value),
            Value::Number(Number::Float { value }) => json!(value),
            Value::Bool(b) => json!(b),
            Value::Null => serde_json::Value::Null,
        }
    }

    fn node_to_json(node: &Node) -> serde_json::Value {
        let mut entry = serde_json::Map::new();
        entry.insert("name".into(), json!(node.name));

        if let Some(ty) = &node.type_annotation {
            entry.insert("type".into(), json!(ty));
        }

        if !node.arguments.is_empty() {
            entry.insert(
                "arguments".into(),
                json!(node.arguments.iter().map(value_to_json).collect::<Vec<_>>()),
            );
        }

        if !node.properties.is_empty() {
            let props = node
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect::<serde_json::Map<_, _>>();
            entry.insert("properties".into(), serde_json::Value::Object(props));
        }

        if let Some(children) = &node.children {
            entry.insert(
                "children".into(),
                json!(children.nodes.iter().map(node_to_json).collect::<Vec<_>>()),
            );
        }

        serde_json::Value::Object(entry)
    }

    let nodes = doc.nodes.iter().map(node_to_json).collect::<Vec<_>>();
    serde_json::to_string_pretty(&serde_json::Value::Array(nodes))
        .unwrap_or_else(|_| "[]".to_string())
}

/// Export a KDL file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns error if the file doesn't exist or contains invalid KDL syntax.
pub fn export_kdl_file(path: &str) -> Result<String, KdlError> {
    let input = fs::read_to_string(path).map_err(|e| KdlError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let mut parser = Parser::new(&input)?;
    let doc = parser.parse_document()?;
    Ok(document_to_json(&doc))
}
