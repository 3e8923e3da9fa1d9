// This module is only used in tests.

use kuchikiki::NodeRef;

use super::*;

/// Parse string into Kuchiki node.
pub fn parse_string(html_str: &str) -> NodeRef {
    HtmlDocument::from_string(html_str, Classifier::default()).into_document()
}

/// Serialize Kuchiki node to string.
pub fn to_string(node: NodeRef) -> String {
    let mut serialized = Vec::new();
    write_node(&mut serialized, &node).unwrap();

    String::from_utf8(serialized).unwrap()
}

/// Round-trip the HTML string through Kuchiki.
pub fn normalize(html_str: &str) -> String {
    to_string(parse_string(html_str))
}
