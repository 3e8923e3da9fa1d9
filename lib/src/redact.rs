use std::collections::HashSet;

use serde_derive::Serialize;
use tracing::{debug, trace, warn};

use crate::error::*;
use crate::tree::*;

/// Replacement written into every redacted input.
pub const SENTINEL: &str = "<DELETED>";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactReport {
    pub inputs_redacted: u32,
    pub containers_visited: u32,
    pub nodes_skipped: u32,
    pub revisits_skipped: u32,
}

pub struct Redactor<'a, T: UiTree> {
    tree: &'a mut T,
    visited: HashSet<usize>,
    report: RedactReport,
}

impl<'a, T: UiTree> Redactor<'a, T> {
    pub fn new(tree: &'a mut T) -> Self {
        Self {
            tree,
            visited: HashSet::new(),
            report: RedactReport::default(),
        }
    }

    /// Blank every input reachable through containers from `root`, then hide `root`.
    pub fn run(mut self, root: &T::Node) -> RedactReport {
        // Depth-first, children in document order.
        let mut stack = vec![root.clone()];

        while let Some(node) = stack.pop() {
            let key = self.tree.node_key(&node);

            if !self.visited.insert(key) {
                // Reached again through a cycle or a shared child.
                warn!("Node {} already visited, skipping.", key);
                self.report.revisits_skipped += 1;
                continue;
            }

            match self.tree.kind(&node) {
                NodeKind::Input => {
                    trace!("Redacting input node {}", key);
                    self.tree.set_value(&node, SENTINEL);
                    self.report.inputs_redacted += 1;
                }
                NodeKind::Container => {
                    self.report.containers_visited += 1;

                    let children = self.tree.children(&node);
                    stack.extend(children.into_iter().rev());
                }
                NodeKind::Other => {
                    self.report.nodes_skipped += 1;
                }
            }
        }

        self.tree.set_hidden(root, true);

        debug!("Redaction complete: {:?}", self.report);

        self.report
    }
}

/// Redact the element `id` in a tree that resolves its own identifiers.
pub fn redact<T>(tree: &mut T, id: &str) -> Result<(), RedactorError>
where
    T: UiTree + Lookup<T::Node>,
{
    let root = tree.lookup(id).ok_or_else(|| RedactorError::not_found(id))?;

    redact_node(tree, &root);

    Ok(())
}

/// Redact the element `id`, resolving it through an external lookup.
pub fn redact_with<T, L>(tree: &mut T, lookup: &L, id: &str) -> Result<(), RedactorError>
where
    T: UiTree,
    L: Lookup<T::Node>,
{
    let root = lookup.lookup(id).ok_or_else(|| RedactorError::not_found(id))?;

    redact_node(tree, &root);

    Ok(())
}

pub fn redact_node<T: UiTree>(tree: &mut T, root: &T::Node) {
    Redactor::new(tree).run(root);
}
