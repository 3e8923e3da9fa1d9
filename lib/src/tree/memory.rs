use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to a node, only valid for the tree that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: usize,
    index: usize,
}

#[derive(Debug)]
struct MemoryNode {
    id: String,
    kind: NodeKind,
    value: Option<String>,
    hidden: bool,
    children: Vec<NodeId>,
}

/// Arena-backed synthetic UI tree.
///
/// Nodes are linked with [`MemoryTree::append_child`] without any structural
/// checks, so malformed (cyclic) trees can be built on purpose.
///
/// A `NodeId` from another tree reads as a childless `Other` node, and
/// writes to it are ignored.
#[derive(Debug)]
pub struct MemoryTree {
    tree: usize,
    nodes: Vec<MemoryNode>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self {
            tree: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, id: impl Into<String>, value: impl Into<String>) -> NodeId {
        self.push(id.into(), NodeKind::Input, Some(value.into()))
    }

    pub fn add_container(&mut self, id: impl Into<String>) -> NodeId {
        self.push(id.into(), NodeKind::Container, None)
    }

    pub fn add_other(&mut self, id: impl Into<String>, value: Option<String>) -> NodeId {
        self.push(id.into(), NodeKind::Other, value)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Find the first node created with the given identifier.
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(|index| NodeId {
            tree: self.tree,
            index,
        })
    }

    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(|n| n.value.as_deref())
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.node(node).map_or(false, |n| n.hidden)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, node: NodeId) -> Option<&MemoryNode> {
        if node.tree != self.tree {
            return None;
        }

        self.nodes.get(node.index)
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut MemoryNode> {
        if node.tree != self.tree {
            return None;
        }

        self.nodes.get_mut(node.index)
    }

    fn push(&mut self, id: String, kind: NodeKind, value: Option<String>) -> NodeId {
        self.nodes.push(MemoryNode {
            id,
            kind,
            value,
            hidden: false,
            children: Vec::new(),
        });

        NodeId {
            tree: self.tree,
            index: self.nodes.len() - 1,
        }
    }
}

impl UiTree for MemoryTree {
    type Node = NodeId;

    fn kind(&self, node: &NodeId) -> NodeKind {
        self.node(*node).map_or(NodeKind::Other, |n| n.kind)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        if let Some(n) = self.node_mut(*node) {
            n.value = Some(value.to_owned());
        }
    }

    fn set_hidden(&mut self, node: &NodeId, hidden: bool) {
        if let Some(n) = self.node_mut(*node) {
            n.hidden = hidden;
        }
    }

    fn node_key(&self, node: &NodeId) -> usize {
        node.index
    }
}

impl Lookup<NodeId> for MemoryTree {
    fn lookup(&self, id: &str) -> Option<NodeId> {
        self.get(id)
    }
}
