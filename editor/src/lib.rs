//! ImGui-based property inspector and scene tree for the engine
//!
//! This crate draws the scene hierarchy and a reflective property editor for
//! the selected object. Panels talk to a [`WidgetHost`] instead of imgui, so
//! the same code runs against a live `imgui::Ui` or the recording
//! [`HeadlessHost`] used in tests.

pub mod dispatch;
pub mod editor_state;
pub mod fonts;
pub mod host;
pub mod input_routing;
pub mod panels;
pub mod reflector;
pub mod report;
pub mod selection;
pub mod settings;
pub mod state_cache;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use dispatch::{PropertyRow, TypeDispatchRegistry, WidgetFn, WidgetOutcome};
pub use editor_state::EditorState;
pub use host::{HeadlessHost, ImguiHost, WidgetHost};
pub use reflector::PropertyReflector;
pub use report::FrameReport;
pub use selection::SelectionModel;
pub use settings::EditorSettings;
pub use state_cache::{OwnerId, WidgetStateCache, WidgetStateKey};
