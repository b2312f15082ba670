use crate::ast::{Document, Node, Value};

/// Fluent construction of a [`Document`] without going through the parser.
///
/// Sugar over the plain model types; the parser never depends on it.
pub struct DocumentBuilder {
    nodes: Vec<Node>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        DocumentBuilder { nodes: Vec::new() }
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn build(self) -> Document {
        Document { nodes: self.nodes }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        DocumentBuilder::new()
    }
}

/// Fluent construction of a single [`Node`].
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        NodeBuilder { node: Node::new(name) }
    }

    pub fn type_annotation(mut self, ty: impl Into<String>) -> Self {
        self.node.type_annotation = Some(ty.into());
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.node.arguments.push(value.into());
        self
    }

    /// Append a property. Re-using a key overwrites the earlier value,
    /// matching the parser's last-occurrence-wins behavior.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.node.properties.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.node
            .children
            .get_or_insert_with(Document::new)
            .nodes
            .push(node);
        self
    }

    pub fn children(mut self, doc: Document) -> Self {
        self.node.children = Some(doc);
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Number;

    #[test]
    fn test_builder_matches_parsed_document() {
        let built = DocumentBuilder::new()
            .node(
                NodeBuilder::new("package")
                    .child(NodeBuilder::new("name").arg("kdl").build())
                    .child(NodeBuilder::new("version").arg("0.0.0").build())
                    .build(),
            )
            .build();

        let parsed = Document::parse(
            "package {\n    name \"kdl\"\n    version \"0.0.0\"\n}",
        )
        .expect("Failed to parse document");

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_prop_overwrites_earlier_key() {
        let node = NodeBuilder::new("n")
            .prop("a", 1i64)
            .prop("b", 2i64)
            .prop("a", 3i64)
            .build();

        assert_eq!(node.properties.len(), 2);
        assert_eq!(node.prop("a"), Some(&Value::Number(Number::integer(3))));
        // first-seen position retained
        assert_eq!(node.properties.get_index(0).map(|(k, _)| k.as_str()), Some("a"));
    }

    #[test]
    fn test_mixed_value_conversions() {
        let node = NodeBuilder::new("mix")
            .arg("text")
            .arg(7i64)
            .arg(2.5f64)
            .arg(false)
            .arg(Value::Null)
            .build();

        assert_eq!(node.arguments.len(), 5);
        assert_eq!(node.arg(0), Some(&Value::String("text".into())));
        assert_eq!(node.arg(3), Some(&Value::Bool(false)));
        assert!(node.arg(4).unwrap().is_null());
    }
}
