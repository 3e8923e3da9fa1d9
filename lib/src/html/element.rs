use html5ever::{local_name, LocalName};
use kuchikiki::*;

use crate::tree::NodeKind;

/// Maps HTML elements onto node kinds by tag name.
#[derive(Clone, Debug)]
pub struct Classifier {
    input_tags: Vec<LocalName>,
    container_tags: Vec<LocalName>,
}

impl Classifier {
    pub fn new<S: AsRef<str>>(input_tags: &[S], container_tags: &[S]) -> Self {
        Self {
            input_tags: to_local_names(input_tags),
            container_tags: to_local_names(container_tags),
        }
    }

    pub fn classify(&self, node: &NodeRef) -> NodeKind {
        if let NodeData::Element(data) = node.data() {
            let name = &data.name.local;

            // Input wins if a tag is listed as both.
            if self.input_tags.contains(name) {
                return NodeKind::Input;
            }

            if self.container_tags.contains(name) {
                return NodeKind::Container;
            }
        }

        NodeKind::Other
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            input_tags: vec![local_name!("input")],
            container_tags: vec![local_name!("div")],
        }
    }
}

/// The HTML parser lowercases tag names, so configured names are lowercased too.
fn to_local_names<S: AsRef<str>>(tags: &[S]) -> Vec<LocalName> {
    tags.iter()
        .map(|tag| LocalName::from(tag.as_ref().to_ascii_lowercase()))
        .collect()
}

pub fn set_attribute(node: &NodeRef, name: LocalName, value: &str) {
    if let NodeData::Element(data) = node.data() {
        data.attributes.borrow_mut().insert(name, value.to_owned());
    }
}

pub fn remove_attribute(node: &NodeRef, name: LocalName) {
    if let NodeData::Element(data) = node.data() {
        data.attributes.borrow_mut().remove(name);
    }
}

pub fn get_attribute(node: &NodeRef, name: LocalName) -> Option<String> {
    if let NodeData::Element(data) = node.data() {
        return data.attributes.borrow().get(name).map(str::to_owned);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::*;

    fn first(node: NodeRef, id: &str) -> NodeRef {
        find_element_by_id(node, id).unwrap()
    }

    #[test]
    fn default_classifier_matches_input_and_div() {
        let node = parse_string(r#"<div id="d">text<input id="i"><span id="s"></span></div>"#);
        let classifier = Classifier::default();

        assert_eq!(classifier.classify(&first(node.clone(), "d")), NodeKind::Container);
        assert_eq!(classifier.classify(&first(node.clone(), "i")), NodeKind::Input);
        assert_eq!(classifier.classify(&first(node.clone(), "s")), NodeKind::Other);

        let text = first(node, "d").first_child().unwrap();
        assert_eq!(classifier.classify(&text), NodeKind::Other);
    }

    #[test]
    fn custom_classifier_ignores_case() {
        let node = parse_string(r#"<form id="f"><textarea id="t"></textarea><div id="d"></div></form>"#);
        let classifier = Classifier::new(&["INPUT", "TextArea"], &["form"]);

        assert_eq!(classifier.classify(&first(node.clone(), "f")), NodeKind::Container);
        assert_eq!(classifier.classify(&first(node.clone(), "t")), NodeKind::Input);
        assert_eq!(classifier.classify(&first(node, "d")), NodeKind::Other);
    }

    #[test]
    fn can_set_and_remove_attributes() {
        let node = parse_string(r#"<input id="i" value="x">"#);
        let input = first(node, "i");

        set_attribute(&input, local_name!("value"), "y");
        assert_eq!(get_attribute(&input, local_name!("value")), Some("y".to_owned()));

        remove_attribute(&input, local_name!("value"));
        assert_eq!(get_attribute(&input, local_name!("value")), None);
    }
}
