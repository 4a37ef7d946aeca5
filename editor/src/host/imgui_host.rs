//! WidgetHost over a live imgui frame

use super::{TreeNodeOptions, TreeNodeResponse, WidgetHost};
use imgui::{Drag, IdStackToken, TreeNodeFlags, TreeNodeToken, Ui, WindowFocusedFlags, WindowToken};
use tracing::warn;

const ERROR_COLOR: [f32; 4] = [1.0, 0.35, 0.35, 1.0];

/// Draws through `imgui::Ui` for the duration of one frame
///
/// Scoped imgui tokens are kept on stacks and dropped by the matching
/// `*_pop`/`end_window` call.
pub struct ImguiHost<'ui> {
    ui: &'ui Ui,
    windows: Vec<Option<WindowToken<'ui>>>,
    tree_nodes: Vec<TreeNodeToken<'ui>>,
    ids: Vec<IdStackToken<'ui>>,
}

impl<'ui> ImguiHost<'ui> {
    pub fn new(ui: &'ui Ui) -> Self {
        Self {
            ui,
            windows: Vec::new(),
            tree_nodes: Vec::new(),
            ids: Vec::new(),
        }
    }
}

impl Drop for ImguiHost<'_> {
    fn drop(&mut self) {
        if !self.tree_nodes.is_empty() || !self.ids.is_empty() || !self.windows.is_empty() {
            warn!(
                tree_nodes = self.tree_nodes.len(),
                ids = self.ids.len(),
                windows = self.windows.len(),
                "Unbalanced imgui scopes at end of frame"
            );
        }
        // innermost scopes first
        while let Some(token) = self.tree_nodes.pop() {
            drop(token);
        }
        while let Some(token) = self.ids.pop() {
            drop(token);
        }
        while let Some(token) = self.windows.pop() {
            drop(token);
        }
    }
}

impl WidgetHost for ImguiHost<'_> {
    fn text(&mut self, text: &str) {
        self.ui.text(text);
    }

    fn text_disabled(&mut self, text: &str) {
        self.ui.text_disabled(text);
    }

    fn error_text(&mut self, text: &str) {
        self.ui.text_colored(ERROR_COLOR, text);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.ui.checkbox(label, value)
    }

    fn input_i32(&mut self, label: &str, value: &mut i32) -> bool {
        self.ui.input_int(label, value).build()
    }

    fn input_i64(&mut self, label: &str, value: &mut i64) -> bool {
        self.ui.input_scalar(label, value).build()
    }

    fn input_f32(&mut self, label: &str, value: &mut f32) -> bool {
        self.ui.input_float(label, value).build()
    }

    fn input_f64(&mut self, label: &str, value: &mut f64) -> bool {
        self.ui.input_scalar(label, value).build()
    }

    fn input_text(&mut self, label: &str, value: &mut String) -> bool {
        self.ui.input_text(label, value).build()
    }

    fn drag_floats(&mut self, label: &str, values: &mut [f32], speed: f32) -> bool {
        Drag::new(label).speed(speed).build_array(self.ui, values)
    }

    fn combo(&mut self, label: &str, current: &mut usize, items: &[String]) -> bool {
        self.ui.combo_simple_string(label, current, items)
    }

    fn tree_node(&mut self, label: &str, options: TreeNodeOptions) -> TreeNodeResponse {
        let mut flags = TreeNodeFlags::empty();
        if options.open_on_arrow {
            flags |= TreeNodeFlags::OPEN_ON_ARROW;
        }
        if options.default_open {
            flags |= TreeNodeFlags::DEFAULT_OPEN;
        }
        if options.selected {
            flags |= TreeNodeFlags::SELECTED;
        }
        if options.leaf {
            flags |= TreeNodeFlags::LEAF | TreeNodeFlags::NO_TREE_PUSH_ON_OPEN;
        }

        let token = self.ui.tree_node_config(label).flags(flags).push();
        let clicked = self.ui.is_item_clicked();
        let open = match token {
            Some(token) => {
                self.tree_nodes.push(token);
                true
            }
            None => false,
        };
        TreeNodeResponse { open, clicked }
    }

    fn tree_pop(&mut self) {
        if self.tree_nodes.pop().is_none() {
            warn!("tree_pop without an open tree node");
        }
    }

    fn button(&mut self, label: &str) -> bool {
        self.ui.button(label)
    }

    fn separator(&mut self) {
        self.ui.separator();
    }

    fn push_id(&mut self, id: &str) {
        self.ids.push(self.ui.push_id(id));
    }

    fn pop_id(&mut self) {
        if self.ids.pop().is_none() {
            warn!("pop_id without a pushed id");
        }
    }

    fn begin_window(&mut self, title: &str) -> bool {
        let token = self.ui.window(title).begin();
        let visible = token.is_some();
        self.windows.push(token);
        visible
    }

    fn end_window(&mut self) {
        if self.windows.pop().is_none() {
            warn!("end_window without a matching begin_window");
        }
    }

    fn extend_selection_held(&self) -> bool {
        self.ui.io().key_shift
    }

    fn gui_wants_input(&self) -> bool {
        self.ui
            .is_window_focused_with_flags(WindowFocusedFlags::ANY_WINDOW)
    }
}
