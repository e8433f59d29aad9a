//! Seam to the drawing backend.

use crate::camera::Camera;
use crate::scene::Scene;

/// Draws the scene as seen by the camera. Called once at the end of every
/// frame, after all of that frame's state updates.
pub trait Renderer {
    /// Draw one frame.
    fn draw(&mut self, scene: &Scene, camera: &Camera);
}

/// Renderer that draws nothing and counts frames. Used by the headless
/// binary, tests, and benches.
#[derive(Debug, Clone, Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    /// Renderer with a zero frame count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of draw calls received.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for NullRenderer {
    fn draw(&mut self, scene: &Scene, camera: &Camera) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} nodes, eye {:?}",
            self.frames,
            scene.len(),
            camera.eye
        );
    }
}
