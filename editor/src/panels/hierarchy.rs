//! Scene hierarchy panel
//!
//! Displays the scene graph as a tree, one level per expanded node, and
//! reports row clicks without touching the selection.

use crate::host::{TreeNodeOptions, WidgetHost};
use crate::report::RowClick;
use crate::selection::SelectionModel;
use engine::scene::{HierarchyTreeWalker, NodeId, SceneGraph};
use tracing::{trace, warn};

pub const SCENE_SETTINGS: &str = "Scene Settings";

/// Draw the hierarchy tree followed by the scene settings button
pub fn draw_hierarchy_panel(
    host: &mut dyn WidgetHost,
    scene: &SceneGraph,
    selection: &SelectionModel,
    scene_settings: Option<NodeId>,
) -> Vec<RowClick> {
    let walker = HierarchyTreeWalker::new(scene);
    let mut clicks = Vec::new();

    for &root in walker.roots() {
        draw_node(host, walker, selection, root, &mut clicks);
    }

    if let Some(settings) = scene_settings {
        host.separator();
        if host.button(SCENE_SETTINGS) {
            clicks.push(RowClick {
                node: settings,
                extend: false,
            });
        }
    }
    clicks
}

fn draw_node(
    host: &mut dyn WidgetHost,
    walker: HierarchyTreeWalker<'_>,
    selection: &SelectionModel,
    node: NodeId,
    clicks: &mut Vec<RowClick>,
) {
    let label = match walker.scene().label(node) {
        Ok(label) => label,
        Err(e) => {
            warn!(node = ?node, error = %e, "Skipping hierarchy row");
            return;
        }
    };

    // labels repeat across the tree, so scope each row by its entity bits
    host.push_id(&node.to_bits().to_string());
    let response = host.tree_node(
        &label,
        TreeNodeOptions {
            leaf: !walker.has_any_children(node),
            open_on_arrow: true,
            selected: selection.contains(node),
            ..Default::default()
        },
    );

    if response.clicked {
        let extend = host.extend_selection_held();
        trace!(node = ?node, extend, "Hierarchy row clicked");
        clicks.push(RowClick { node, extend });
    }

    if response.open {
        for group in walker.children(node) {
            for child in group.nodes {
                draw_node(host, walker, selection, child, clicks);
            }
        }
        host.tree_pop();
    }
    host.pop_id();
}
