//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::ShowroomEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::command::ShowroomCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ShowroomCommand`]s.
///
/// A left press followed by a release with no drag in between is a click;
/// a press followed by movement orbits the camera and suppresses the click.
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the current press has turned into a drag.
    is_dragging: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            mouse_pressed: false,
            is_dragging: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ShowroomCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ShowroomCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(ShowroomCommand::Zoom { delta }),
            InputEvent::Resized { width, height } => {
                Some(ShowroomCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce an orbit command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ShowroomCommand> {
        let position = Vec2::new(x, y);
        let delta = position - self.cursor;
        self.cursor = position;

        if !self.mouse_pressed {
            return None;
        }
        if delta.length_squared() > 1.0 {
            self.is_dragging = true;
        }
        Some(ShowroomCommand::Orbit { delta })
    }

    /// Left press/release. A release that ends a non-drag press is a click.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ShowroomCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.mouse_pressed = true;
            self.is_dragging = false;
            return None;
        }

        let was_click = self.mouse_pressed && !self.is_dragging;
        self.mouse_pressed = false;
        self.is_dragging = false;
        was_click.then_some(ShowroomCommand::Click {
            x: self.cursor.x,
            y: self.cursor.y,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doors::DoorSide;

    fn press(p: &mut InputProcessor, pressed: bool) -> Option<ShowroomCommand> {
        p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        })
    }

    #[test]
    fn press_release_in_place_is_click() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 120.0, y: 80.0 });
        assert_eq!(press(&mut p, true), None);
        assert_eq!(
            press(&mut p, false),
            Some(ShowroomCommand::Click { x: 120.0, y: 80.0 })
        );
    }

    #[test]
    fn drag_orbits_and_suppresses_click() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let _ = press(&mut p, true);
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 30.0, y: 10.0 });
        assert_eq!(
            cmd,
            Some(ShowroomCommand::Orbit {
                delta: Vec2::new(20.0, 0.0)
            })
        );
        assert_eq!(press(&mut p, false), None);
    }

    #[test]
    fn sub_pixel_jitter_still_clicks() {
        let mut p = InputProcessor::new();
        let _ = press(&mut p, true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.5, y: 0.5 });
        assert!(matches!(
            press(&mut p, false),
            Some(ShowroomCommand::Click { .. })
        ));
    }

    #[test]
    fn hover_without_press_is_silent() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            None
        );
        let right = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        });
        assert_eq!(right, None);
    }

    #[test]
    fn keys_map_through_bindings() {
        let p = InputProcessor::new();
        assert_eq!(p.handle_key_press("KeyF"), Some(ShowroomCommand::MoveFar));
        assert_eq!(
            p.handle_key_press("KeyR"),
            Some(ShowroomCommand::ToggleDoor(DoorSide::Right))
        );
        assert_eq!(p.handle_key_press("KeyQ"), None);
    }
}
