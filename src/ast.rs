use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::KdlError;

/// Radix of an integer literal as written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hex,
}

/// A numeric value together with the lexical form it was written in.
///
/// Integers remember their radix so callers can tell `0x1a` from `26`;
/// the canonical serializer renders decimal either way, so round-tripping
/// is value-equivalent rather than byte-identical.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer { value: i64, base: Base },
    Float { value: f64 },
}

/// Equality is value-level: `0x1a` equals `26`. The radix is lexical
/// metadata and the canonical serializer discards it anyway.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer { value: a, .. }, Number::Integer { value: b, .. }) => a == b,
            (Number::Float { value: a }, Number::Float { value: b }) => a == b,
            _ => false,
        }
    }
}

impl Number {
    pub fn integer(value: i64) -> Self {
        Number::Integer { value, base: Base::Decimal }
    }

    pub fn float(value: f64) -> Self {
        Number::Float { value }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer { value, .. } => *value as f64,
            Number::Float { value } => *value,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer { value, .. } => Some(*value),
            Number::Float { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_number(&self) -> Option<&Number> {
        if let Value::Number(n) = self { Some(n) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::integer(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::float(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

/// A named node: positional arguments, keyed properties, optional children.
///
/// Properties are an insertion-ordered map; re-assigning a key overwrites
/// the value but keeps the key at its first-seen position.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub type_annotation: Option<String>,
    pub arguments: Vec<Value>,
    pub properties: IndexMap<String, Value>,
    pub children: Option<Document>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            type_annotation: None,
            arguments: Vec::new(),
            properties: IndexMap::new(),
            children: None,
        }
    }

    /// Positional argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }

    /// Property value for `key`, if present.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// First child node with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.as_ref().and_then(|doc| doc.get(name))
    }
}

/// An ordered sequence of top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Document { nodes: Vec::new() }
    }

    /// Parse a complete KDL document from an in-memory string.
    pub fn parse(input: &str) -> Result<Document, KdlError> {
        let mut parser = crate::parser::Parser::new(input)?;
        parser.parse_document()
    }

    /// Read and parse a KDL document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document, KdlError> {
        let content = fs::read_to_string(&path).map_err(|e| KdlError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        Document::parse(&content)
    }

    /// First node with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}
