use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Pending motion below this is dropped so a settled orbit stops writing
/// to the camera.
const SETTLE_EPSILON: f32 = 1e-6;
/// Keeps the eye off the poles, where the view's up vector degenerates.
const POLAR_MARGIN: f32 = 0.01;

/// Damped orbit controls: drag rotates the eye about [`target`](Self::target),
/// scroll dollies toward or away from it.
///
/// Input accumulates pending motion; [`update`](Self::update) applies a
/// `damping` fraction of it each frame, which gives the drag its inertia.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitControls {
    /// Controls orbiting `target` with speeds and limits from `options`.
    #[must_use]
    pub fn new(target: Vec3, options: &CameraOptions) -> Self {
        Self {
            target,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            damping: options.damping.clamp(0.01, 1.0),
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Queue a drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.pending_yaw -= delta.x * self.rotate_speed;
        self.pending_pitch -= delta.y * self.rotate_speed;
    }

    /// Queue a scroll step (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.pending_zoom += delta * self.zoom_speed;
    }

    /// Whether queued motion remains to be applied.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_yaw == 0.0 && self.pending_pitch == 0.0 && self.pending_zoom == 0.0
    }

    /// Apply one frame of damped motion to `camera`. Returns `true` if the
    /// camera moved.
    ///
    /// A settled orbit does not touch the camera, so poses written by a
    /// camera transition survive bit-for-bit.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if self.is_settled() {
            return false;
        }

        let yaw = self.pending_yaw * self.damping;
        let pitch = self.pending_pitch * self.damping;
        let zoom = self.pending_zoom * self.damping;
        self.pending_yaw = settle(self.pending_yaw - yaw);
        self.pending_pitch = settle(self.pending_pitch - pitch);
        self.pending_zoom = settle(self.pending_zoom - zoom);

        let offset = camera.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        // Spherical coordinates about +Y: theta is azimuth, phi is polar.
        let theta = offset.x.atan2(offset.z) + yaw;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + pitch)
            .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
        let radius =
            (radius * (-zoom).exp()).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.eye = self.target + new_offset;
        camera.target = self.target;
        true
    }
}

fn settle(value: f32) -> f32 {
    if value.abs() < SETTLE_EPSILON {
        0.0
    } else {
        value
    }
}
