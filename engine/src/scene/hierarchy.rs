//! One-level-at-a-time enumeration of the scene tree

use super::{ChildCategory, NodeId, SceneGraph};

/// Children of one category, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildGroup {
    pub category: ChildCategory,
    pub nodes: Vec<NodeId>,
}

/// Walks the scene tree lazily for outline rendering
///
/// Only ever looks one level below the node it is asked about; expansion
/// state belongs to the caller.
#[derive(Clone, Copy)]
pub struct HierarchyTreeWalker<'a> {
    scene: &'a SceneGraph,
}

impl<'a> HierarchyTreeWalker<'a> {
    pub fn new(scene: &'a SceneGraph) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &'a SceneGraph {
        self.scene
    }

    /// Top-level nodes; detached nodes are not part of the tree
    pub fn roots(&self) -> &'a [NodeId] {
        self.scene.roots()
    }

    /// Direct children of `node`, grouped by category in declaration order
    pub fn children(&self, node: NodeId) -> Vec<ChildGroup> {
        self.scene
            .children(node)
            .map(|children| {
                children
                    .0
                    .iter()
                    .map(|(category, nodes)| ChildGroup {
                        category: *category,
                        nodes: nodes.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any category of `node` has a child; stops at the first hit
    pub fn has_any_children(&self, node: NodeId) -> bool {
        self.scene
            .children(node)
            .map(|children| children.0.iter().any(|(_, nodes)| !nodes.is_empty()))
            .unwrap_or(false)
    }
}
