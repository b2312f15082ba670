#[cfg(test)]
use super::*;
use crate::ast::{Number, Value};
use crate::serializer::serialize;

fn parse(input: &str) -> Document {
    let mut parser = Parser::new(input).expect("Failed to create parser");
    parser.parse_document().expect("Failed to parse document")
}

fn parse_err(input: &str) -> KdlError {
    let mut parser = match Parser::new(input) {
        Ok(p) => p,
        Err(e) => return e,
    };
    parser
        .parse_document()
        .expect_err("Expected the document to be rejected")
}

#[test]
fn test_package_example() {
    let doc = parse(
        r#"
package {
    name "kdl"
    version "0.0.0"
}
"#,
    );

    assert_eq!(doc.len(), 1);
    let package = doc.get("package").expect("Missing 'package' node");
    assert!(package.arguments.is_empty());
    assert!(package.properties.is_empty());

    let children = package.children.as_ref().expect("Missing children");
    assert_eq!(children.len(), 2);
    assert_eq!(
        children.get("name").unwrap().arg(0),
        Some(&Value::String("kdl".into()))
    );
    assert_eq!(
        children.get("version").unwrap().arg(0),
        Some(&Value::String("0.0.0".into()))
    );
}

#[test]
fn test_distinct_property_keys() {
    let doc = parse("node a=1 b=2 c=1");

    let node = doc.get("node").unwrap();
    assert!(node.arguments.is_empty());
    assert_eq!(node.properties.len(), 3);
    assert_eq!(node.prop("a"), Some(&Value::Number(Number::integer(1))));
    assert_eq!(node.prop("b"), Some(&Value::Number(Number::integer(2))));
    assert_eq!(node.prop("c"), Some(&Value::Number(Number::integer(1))));
}

#[test]
fn test_duplicate_property_key_last_wins() {
    let doc = parse(r#"node "pos" key="first" other=1 key="second""#);

    let node = doc.get("node").unwrap();
    assert_eq!(node.arguments, vec![Value::String("pos".into())]);
    assert_eq!(node.properties.len(), 2);
    assert_eq!(node.prop("key"), Some(&Value::String("second".into())));
    // overwritten key keeps its first-seen position
    assert_eq!(
        node.properties.get_index(0).map(|(k, _)| k.as_str()),
        Some("key")
    );
}

#[test]
fn test_arguments_preserve_order() {
    let doc = parse(r#"node 1 "two" 3.0 true null"#);

    let node = doc.get("node").unwrap();
    assert_eq!(
        node.arguments,
        vec![
            Value::Number(Number::integer(1)),
            Value::String("two".into()),
            Value::Number(Number::float(3.0)),
            Value::Bool(true),
            Value::Null,
        ]
    );
}

#[test]
fn test_semicolon_terminates_nodes() {
    let doc = parse("alpha 1; beta 2; gamma");

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.nodes[0].name, "alpha");
    assert_eq!(doc.nodes[1].name, "beta");
    assert_eq!(doc.nodes[2].name, "gamma");
}

#[test]
fn test_empty_input_is_a_valid_document() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n").is_empty());
    assert!(parse("// just a comment\n").is_empty());
}

#[test]
fn test_type_annotations() {
    let doc = parse(r#"(author)person "alice" {
    (date)birthday "2000-01-01"
}"#);

    let person = doc.get("person").unwrap();
    assert_eq!(person.type_annotation.as_deref(), Some("author"));

    let birthday = person.child("birthday").unwrap();
    assert_eq!(birthday.type_annotation.as_deref(), Some("date"));
}

#[test]
fn test_quoted_node_names_and_keys() {
    let doc = parse(r#""two words" "spaced key"=1"#);

    let node = doc.get("two words").unwrap();
    assert_eq!(node.prop("spaced key"), Some(&Value::Number(Number::integer(1))));
}

#[test]
fn test_keyword_tokens_as_property_keys() {
    let doc = parse("node true=1 null=2");

    let node = doc.get("node").unwrap();
    assert_eq!(node.prop("true"), Some(&Value::Number(Number::integer(1))));
    assert_eq!(node.prop("null"), Some(&Value::Number(Number::integer(2))));
    assert!(node.arguments.is_empty());
}

#[test]
fn test_nested_children() {
    let doc = parse(
        r#"
a {
    b {
        c 1
    }
    d 2
}
"#,
    );

    let a = doc.get("a").unwrap();
    let b = a.child("b").unwrap();
    let c = b.child("c").unwrap();
    assert_eq!(c.arg(0), Some(&Value::Number(Number::integer(1))));
    assert_eq!(
        a.child("d").unwrap().arg(0),
        Some(&Value::Number(Number::integer(2)))
    );
}

#[test]
fn test_slashdash_disables_a_node() {
    let doc = parse(
        r#"
keep 1
/-dropped 2 key=3 {
    inner
}
also-kept 4
"#,
    );

    assert_eq!(doc.len(), 2);
    assert!(doc.get("dropped").is_none());
    assert!(doc.get("keep").is_some());
    assert!(doc.get("also-kept").is_some());
}

#[test]
fn test_slashdash_disables_argument_property_and_children() {
    let doc = parse(r#"node 1 /-2 keep="yes" /-gone="no" /-{ invisible } { visible }"#);

    let node = doc.get("node").unwrap();
    assert_eq!(node.arguments, vec![Value::Number(Number::integer(1))]);
    assert_eq!(node.properties.len(), 1);
    assert_eq!(node.prop("keep"), Some(&Value::String("yes".into())));
    assert!(node.prop("gone").is_none());

    let children = node.children.as_ref().unwrap();
    assert!(children.get("visible").is_some());
    assert!(children.get("invisible").is_none());
}

#[test]
fn test_slashdashed_node_must_still_be_valid() {
    // disabled, but the unterminated string is still a syntax error
    let err = parse_err("/-broken \"unclosed\nnext 1");
    assert!(matches!(err, KdlError::UnclosedString { .. }));
}

#[test]
fn test_unmatched_open_brace() {
    let err = parse_err("node {\n    child\n");
    assert!(matches!(err, KdlError::UnclosedBlock { .. }));
}

#[test]
fn test_stray_close_brace_is_trailing_content() {
    let err = parse_err("node 1\n}\n");
    assert!(matches!(err, KdlError::TrailingContent { .. }));
}

#[test]
fn test_bare_word_is_not_a_value() {
    let err = parse_err("node bareword");
    assert!(matches!(err, KdlError::InvalidToken { .. }));
}

#[test]
fn test_missing_value_after_equals() {
    let err = parse_err("node key=\nnext");
    assert!(matches!(err, KdlError::InvalidToken { .. }));
}

#[test]
fn test_arguments_after_children_are_rejected() {
    let err = parse_err("node { child } 5");
    assert!(matches!(err, KdlError::SyntaxError { .. }));
}

#[test]
fn test_slashdash_entries_after_children_are_rejected() {
    // discarded entries follow the same placement rule as kept ones
    let err = parse_err("node { a } /-5");
    assert!(matches!(err, KdlError::SyntaxError { .. }));

    let err = parse_err("node { a } /-{ b }");
    assert!(matches!(err, KdlError::SyntaxError { .. }));
}

#[test]
fn test_second_children_block_is_rejected() {
    let err = parse_err("node { a } { b }");
    assert!(matches!(err, KdlError::SyntaxError { .. }));
}

#[test]
fn test_nesting_depth_is_bounded() {
    let depth = MAX_DEPTH + 10;
    let mut input = String::new();
    for _ in 0..depth {
        input.push_str("a {\n");
    }
    for _ in 0..depth {
        input.push_str("}\n");
    }

    let err = parse_err(&input);
    assert!(matches!(err, KdlError::NestingTooDeep { .. }));
}

#[test]
fn test_comments_between_nodes() {
    let doc = parse(
        r#"
// leading comment
first 1
/* block
   spanning lines */
second 2 // trailing comment
"#,
    );

    assert_eq!(doc.len(), 2);
    assert_eq!(
        doc.get("second").unwrap().arg(0),
        Some(&Value::Number(Number::integer(2)))
    );
}

#[test]
fn test_numeric_bases_in_arguments() {
    let doc = parse("node 0x1A 0o17 0b101 42 -3.14 1e10");

    let node = doc.get("node").unwrap();
    assert_eq!(
        node.arguments,
        vec![
            Value::Number(Number::integer(26)),
            Value::Number(Number::integer(15)),
            Value::Number(Number::integer(5)),
            Value::Number(Number::integer(42)),
            Value::Number(Number::float(-3.14)),
            Value::Number(Number::float(1e10)),
        ]
    );
}

#[test]
fn test_round_trip_is_structurally_stable() {
    let input = r#"
(service)server "primary" host="localhost" port=0x1F40 {
    tls enabled=true cert="/etc/certs/main.pem"
    timeouts read=30 write=30.5
    /-debug verbose=true
    "odd name" null
}
limits max=1_000 rate=2.5e2
"#;

    let doc = parse(input);
    let text = serialize(&doc);
    let reparsed = Document::parse(&text).expect("Canonical output failed to re-parse");

    assert_eq!(doc, reparsed);
    // canonical form is a fixed point after one round trip
    assert_eq!(serialize(&reparsed), text);
}

#[test]
fn test_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "package {{\n    name \"kdl\"\n}}").expect("Failed to write temp file");

    let doc = Document::from_file(file.path()).expect("Failed to load document");
    assert_eq!(
        doc.get("package").unwrap().child("name").unwrap().arg(0),
        Some(&Value::String("kdl".into()))
    );

    let err = Document::from_file("/nonexistent/path.kdl").unwrap_err();
    assert!(matches!(err, KdlError::FileError { .. }));
}
