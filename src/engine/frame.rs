use super::renderer::Renderer;
use super::ShowroomEngine;
use crate::animation::{Animated, AnimationSample};

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Seconds the frame advanced animations by.
    pub dt: f32,
    /// Whether orbit damping moved the camera.
    pub orbit_moved: bool,
    /// Tween samples written to the scene or camera.
    pub samples_applied: usize,
    /// Tweens still running after this frame.
    pub active_animations: usize,
}

impl<R: Renderer> ShowroomEngine<R> {
    /// Run one frame if the frame limiter allows it, using wall-clock time
    /// since the previous frame.
    pub fn tick(&mut self) -> Option<FrameReport> {
        if !self.frame_timing.should_render() {
            return None;
        }
        let dt = self.frame_timing.begin_frame();
        Some(self.frame(dt))
    }

    /// Run one frame that advances time by `dt` seconds.
    ///
    /// Order within a frame: attach a freshly loaded scene, apply orbit
    /// damping, advance every tween and apply its value, then draw. The
    /// draw therefore always sees this frame's final state, and a camera
    /// walk overrides any orbit motion in the same frame.
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        let dt = dt.max(0.0);
        self.poll_pending_scene();

        let orbit_moved = self.orbit.update(&mut self.camera);

        let samples = self.scheduler.advance(dt);
        let samples_applied = samples
            .into_iter()
            .filter(|&sample| self.apply_sample(sample))
            .count();

        self.renderer.draw(&self.scene, &self.camera);

        FrameReport {
            dt,
            orbit_moved,
            samples_applied,
            active_animations: self.scheduler.active_count(),
        }
    }

    /// Route a tween sample to the controller that owns its track.
    fn apply_sample(&mut self, sample: AnimationSample) -> bool {
        match sample.value {
            Animated::DoorAngle { side, angle } => {
                let pivot = self.roles.pivot(side);
                self.doors.apply(
                    side,
                    sample.handle,
                    angle,
                    sample.finished,
                    pivot.map(|id| (&mut self.scene, id)),
                )
            }
            Animated::CameraPose(pose) => {
                let applied = self.camera_transition.apply(
                    sample.handle,
                    pose,
                    sample.finished,
                    &mut self.camera,
                );
                if applied {
                    self.orbit.target = pose.target;
                }
                applied
            }
        }
    }
}
