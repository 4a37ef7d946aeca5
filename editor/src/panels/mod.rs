//! Editor UI panels
//!
//! The hierarchy tree and the property inspector. Both draw through a
//! [`WidgetHost`](crate::host::WidgetHost) and never talk to imgui directly.

pub mod hierarchy;
pub mod inspector;

pub use hierarchy::draw_hierarchy_panel;
pub use inspector::{draw_inspector_panel, InspectorContext};
