//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, a panel button, or a programmatic call, is represented as a
//! `ShowroomCommand`. Consumers construct commands and pass them to
//! [`ShowroomEngine::execute`](super::ShowroomEngine::execute).

use glam::Vec2;

use crate::doors::DoorSide;

/// A single user-facing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowroomCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// Click at a canvas pixel (origin top-left).
    Click {
        /// Pixel column.
        x: f32,
        /// Pixel row.
        y: f32,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera by `delta` pixels of drag.
    Orbit {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Walk up to the car.
    MoveNear,

    /// Back away from the car.
    MoveFar,

    /// Walk up or back away, whichever is valid from the resting mode.
    ToggleCamera,

    // ── Doors ───────────────────────────────────────────────────────
    /// Open or close one door without a click.
    ToggleDoor(DoorSide),

    // ── Viewport ────────────────────────────────────────────────────
    /// The canvas changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
