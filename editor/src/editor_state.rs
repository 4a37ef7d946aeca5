//! Main editor state management
//!
//! This module contains the EditorState struct, which owns every piece of
//! state the panels keep between frames: the selection, the widget state
//! cache, the reflection cache and the widget dispatch table.

use crate::dispatch::TypeDispatchRegistry;
use crate::host::WidgetHost;
use crate::panels::{draw_hierarchy_panel, draw_inspector_panel, InspectorContext};
use crate::reflector::PropertyReflector;
use crate::report::FrameReport;
use crate::selection::SelectionModel;
use crate::settings::EditorSettings;
use crate::state_cache::WidgetStateCache;
use engine::scene::{NodeId, SceneGraph};
use tracing::{info, trace};

pub const TREE_VIEW_WINDOW: &str = "Tree View";
pub const PROPERTIES_WINDOW: &str = "Properties";

/// Composition root of the editor panels
pub struct EditorState {
    pub settings: EditorSettings,
    pub selection: SelectionModel,
    pub cache: WidgetStateCache,
    reflector: PropertyReflector,
    dispatch: TypeDispatchRegistry,
    /// Detached node selected by the "Scene Settings" button
    scene_settings: Option<NodeId>,
    frame: u64,
}

impl EditorState {
    pub fn new(settings: EditorSettings) -> Self {
        info!(
            max_nesting_depth = settings.inspector.max_nesting_depth,
            sweep_interval = settings.inspector.cache_sweep_interval,
            "Initializing editor state"
        );
        Self {
            settings,
            selection: SelectionModel::new(),
            cache: WidgetStateCache::new(),
            reflector: PropertyReflector::new(),
            dispatch: TypeDispatchRegistry::default(),
            scene_settings: None,
            frame: 0,
        }
    }

    pub fn with_scene_settings(mut self, node: NodeId) -> Self {
        self.scene_settings = Some(node);
        self
    }

    pub fn scene_settings(&self) -> Option<NodeId> {
        self.scene_settings
    }

    pub fn reflector(&self) -> &PropertyReflector {
        &self.reflector
    }

    /// Number of frames drawn so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Draw both panels for one frame and apply tree clicks to the selection
    ///
    /// Clicks take effect after the inspector has drawn, so the inspector
    /// shows the new selection on the following frame.
    pub fn draw_frame(&mut self, host: &mut dyn WidgetHost, scene: &mut SceneGraph) -> FrameReport {
        let mut report = FrameReport::default();

        if host.begin_window(TREE_VIEW_WINDOW) {
            report.clicks =
                draw_hierarchy_panel(host, scene, &self.selection, self.scene_settings);
        }
        host.end_window();

        if host.begin_window(PROPERTIES_WINDOW) {
            let mut ctx = InspectorContext::new(
                host,
                &mut self.cache,
                &mut self.reflector,
                &self.dispatch,
                &self.settings.inspector,
                &mut report,
            );
            draw_inspector_panel(&mut ctx, scene, &self.selection);
        }
        host.end_window();

        for click in &report.clicks {
            self.selection.select(click.node, click.extend);
        }

        self.frame += 1;
        let interval = self.settings.inspector.cache_sweep_interval;
        if interval > 0 && self.frame % interval == 0 {
            self.sweep(scene);
        }
        report
    }

    /// Drop widget state and selection entries for nodes that no longer exist
    pub fn sweep(&mut self, scene: &SceneGraph) -> usize {
        let removed = self.cache.sweep(|node| scene.contains(node));
        self.selection.retain(|node| scene.contains(node));
        trace!(removed, remaining = self.cache.len(), "Swept widget state cache");
        removed
    }
}
