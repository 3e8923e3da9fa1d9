mod memory;

pub use self::memory::*;

/// Classification of a node, resolved once per visited node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Holds an editable text value.
    Input,
    /// Holds an ordered sequence of child nodes.
    Container,
    /// Anything else. Neither mutated nor descended into.
    Other,
}

/// Mutable view of an externally-owned UI tree.
pub trait UiTree {
    type Node: Clone;

    fn kind(&self, node: &Self::Node) -> NodeKind;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn set_value(&mut self, node: &Self::Node, value: &str);
    fn set_hidden(&mut self, node: &Self::Node, hidden: bool);

    /// Stable identity of a node, used to detect revisits.
    fn node_key(&self, node: &Self::Node) -> usize;
}

/// Resolves an element identifier to a node handle.
pub trait Lookup<N> {
    fn lookup(&self, id: &str) -> Option<N>;
}

impl<N, F> Lookup<N> for F
where
    F: Fn(&str) -> Option<N>,
{
    fn lookup(&self, id: &str) -> Option<N> {
        self(id)
    }
}
