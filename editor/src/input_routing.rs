//! Routing of window input between the GUI and the 3D viewport

use winit::event::{Ime, WindowEvent};

/// The part of a window event that matters for routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventKind {
    CursorMoved,
    MouseButton { pressed: bool },
    Scroll,
    Key { pressed: bool },
    Character,
    FileDrop,
}

impl InputEventKind {
    /// Classify a winit event; events that are not input yield `None`
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CursorMoved { .. } => Some(Self::CursorMoved),
            WindowEvent::MouseInput { state, .. } => Some(Self::MouseButton {
                pressed: state.is_pressed(),
            }),
            WindowEvent::MouseWheel { .. } => Some(Self::Scroll),
            WindowEvent::KeyboardInput { event, .. } => Some(Self::Key {
                pressed: event.state.is_pressed(),
            }),
            WindowEvent::Ime(Ime::Commit(_)) => Some(Self::Character),
            WindowEvent::DroppedFile(_) => Some(Self::FileDrop),
            _ => None,
        }
    }
}

/// Whether the viewport should see an event given the GUI focus state
///
/// Cursor motion and releases always pass so the viewport never misses the
/// end of a drag it started.
pub fn forward_to_viewport(kind: InputEventKind, gui_focused: bool) -> bool {
    match kind {
        InputEventKind::CursorMoved
        | InputEventKind::MouseButton { pressed: false }
        | InputEventKind::Key { pressed: false } => true,
        InputEventKind::MouseButton { pressed: true }
        | InputEventKind::Key { pressed: true }
        | InputEventKind::Scroll
        | InputEventKind::Character
        | InputEventKind::FileDrop => !gui_focused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_presses_blocked_while_gui_focused() {
        for kind in [
            InputEventKind::MouseButton { pressed: true },
            InputEventKind::Key { pressed: true },
            InputEventKind::Scroll,
            InputEventKind::Character,
            InputEventKind::FileDrop,
        ] {
            assert!(!forward_to_viewport(kind, true), "{kind:?}");
            assert!(forward_to_viewport(kind, false), "{kind:?}");
        }
    }

    #[test]
    fn test_motion_and_releases_always_forwarded() {
        for kind in [
            InputEventKind::CursorMoved,
            InputEventKind::MouseButton { pressed: false },
            InputEventKind::Key { pressed: false },
        ] {
            assert!(forward_to_viewport(kind, true), "{kind:?}");
            assert!(forward_to_viewport(kind, false), "{kind:?}");
        }
    }

    #[test]
    fn test_classify_window_events() {
        let drop = WindowEvent::DroppedFile(PathBuf::from("scene.json"));
        assert_eq!(
            InputEventKind::from_window_event(&drop),
            Some(InputEventKind::FileDrop)
        );

        let typed = WindowEvent::Ime(Ime::Commit("é".to_string()));
        assert_eq!(
            InputEventKind::from_window_event(&typed),
            Some(InputEventKind::Character)
        );

        assert_eq!(
            InputEventKind::from_window_event(&WindowEvent::Focused(true)),
            None
        );
    }
}
