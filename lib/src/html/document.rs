use std::borrow::Cow;
use std::path::Path;
use std::rc::Rc;

use html5ever::local_name;
use kuchikiki::*;

use crate::error::*;
use crate::tree::{Lookup, NodeKind, UiTree};

use super::*;

/// A parsed HTML document exposed as a redactable UI tree.
pub struct HtmlDocument {
    pub root: NodeRef,
    classifier: Classifier,
}

impl HtmlDocument {
    pub fn new(root: NodeRef, classifier: Classifier) -> Self {
        Self { root, classifier }
    }

    pub fn from_string(html_str: &str, classifier: Classifier) -> Self {
        use html5ever::tendril::TendrilSink;

        let root = kuchikiki::parse_html().from_utf8().one(html_str.as_bytes());

        Self::new(root, classifier)
    }

    pub fn from_file(file_path: &Path, classifier: Classifier) -> Result<Self, RedactorError> {
        let root = parse_file(file_path)?;

        Ok(Self::new(root, classifier))
    }

    pub fn write_file(&self, file_path: &Path) -> Result<(), RedactorError> {
        write_file(file_path, &self.root)
    }

    pub fn to_string(&self) -> Result<String, RedactorError> {
        let mut serialized = Vec::new();
        write_node(&mut serialized, &self.root)?;

        String::from_utf8(serialized).map_err(|err| RedactorError::Serialize(Cow::Owned(err.to_string())))
    }

    pub fn into_document(self) -> NodeRef {
        self.root
    }
}

impl UiTree for HtmlDocument {
    type Node = NodeRef;

    fn kind(&self, node: &NodeRef) -> NodeKind {
        self.classifier.classify(node)
    }

    fn children(&self, node: &NodeRef) -> Vec<NodeRef> {
        node.children().collect()
    }

    fn set_value(&mut self, node: &NodeRef, value: &str) {
        set_attribute(node, local_name!("value"), value);
    }

    fn set_hidden(&mut self, node: &NodeRef, hidden: bool) {
        if hidden {
            set_attribute(node, local_name!("hidden"), "");
        } else {
            remove_attribute(node, local_name!("hidden"));
        }
    }

    fn node_key(&self, node: &NodeRef) -> usize {
        Rc::as_ptr(&node.0) as usize
    }
}

impl Lookup<NodeRef> for HtmlDocument {
    fn lookup(&self, id: &str) -> Option<NodeRef> {
        find_element_by_id(self.root.clone(), id)
    }
}
