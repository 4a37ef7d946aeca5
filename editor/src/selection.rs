//! Ordered selection of scene nodes

use engine::scene::NodeId;
use tracing::debug;

/// Currently selected nodes in insertion order
///
/// The first node is the one the inspector shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    nodes: Vec<NodeId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `node`, or toggle it when extending
    pub fn select(&mut self, node: NodeId, extend: bool) {
        if !extend {
            self.nodes.clear();
            self.nodes.push(node);
        } else if let Some(index) = self.nodes.iter().position(|n| *n == node) {
            self.nodes.remove(index);
        } else {
            self.nodes.push(node);
        }
        debug!(node = ?node, extend, selected = self.nodes.len(), "Selection changed");
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop nodes that no longer satisfy `keep`
    pub fn retain(&mut self, keep: impl Fn(NodeId) -> bool) {
        self.nodes.retain(|node| keep(*node));
    }
}
