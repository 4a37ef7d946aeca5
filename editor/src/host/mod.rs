//! Immediate-mode widget capability consumed by the inspector and tree panels
//!
//! Panels only ever talk to a [`WidgetHost`]; [`ImguiHost`] draws through a live
//! `imgui::Ui`, [`HeadlessHost`] records rows and replays scripted input.

mod headless;
mod imgui_host;

pub use headless::{HeadlessHost, Interaction, Row, RowKind};
pub use imgui_host::ImguiHost;

/// How a tree node row is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeNodeOptions {
    /// No expand arrow; the node has no children
    pub leaf: bool,
    pub default_open: bool,
    /// Only the arrow toggles expansion, clicking the label selects
    pub open_on_arrow: bool,
    pub selected: bool,
}

impl TreeNodeOptions {
    /// Collapsible property section, open on first display
    pub fn section() -> Self {
        Self {
            default_open: true,
            open_on_arrow: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeNodeResponse {
    /// Whether the node is expanded; the caller must call [`WidgetHost::tree_pop`]
    pub open: bool,
    /// The row label was clicked this frame
    pub clicked: bool,
}

/// Low-level widget primitives of an immediate-mode GUI
///
/// Value widgets edit in place and return `true` when the value changed this
/// frame.
pub trait WidgetHost {
    fn text(&mut self, text: &str);

    fn text_disabled(&mut self, text: &str);

    /// Inert row reporting a fault
    fn error_text(&mut self, text: &str);

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;

    fn input_i32(&mut self, label: &str, value: &mut i32) -> bool;

    fn input_i64(&mut self, label: &str, value: &mut i64) -> bool;

    fn input_f32(&mut self, label: &str, value: &mut f32) -> bool;

    fn input_f64(&mut self, label: &str, value: &mut f64) -> bool;

    fn input_text(&mut self, label: &str, value: &mut String) -> bool;

    /// Drag field over 2 to 4 single-precision components
    fn drag_floats(&mut self, label: &str, values: &mut [f32], speed: f32) -> bool;

    fn combo(&mut self, label: &str, current: &mut usize, items: &[String]) -> bool;

    fn tree_node(&mut self, label: &str, options: TreeNodeOptions) -> TreeNodeResponse;

    fn tree_pop(&mut self);

    fn button(&mut self, label: &str) -> bool;

    fn separator(&mut self);

    fn push_id(&mut self, id: &str);

    fn pop_id(&mut self);

    /// Begin a top-level window; [`WidgetHost::end_window`] must follow either way
    fn begin_window(&mut self, title: &str) -> bool;

    fn end_window(&mut self);

    /// Whether the "extend selection" modifier (shift) is held
    fn extend_selection_held(&self) -> bool;

    /// Whether any GUI window has focus, i.e. input belongs to the GUI
    fn gui_wants_input(&self) -> bool;
}
