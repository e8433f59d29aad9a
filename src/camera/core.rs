use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::picking::ray::Ray;

/// Camera eye position plus look-at target: the part of the camera that
/// transitions animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
}

impl CameraPose {
    /// Pose from plain arrays, as stored in options.
    #[must_use]
    pub fn from_arrays(eye: [f32; 3], target: [f32; 3]) -> Self {
        Self {
            eye: Vec3::from(eye),
            target: Vec3::from(target),
        }
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &CameraPose, epsilon: f32) -> bool {
        self.eye.abs_diff_eq(other.eye, epsilon)
            && self.target.abs_diff_eq(other.target, epsilon)
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target` with +Y up.
    #[must_use]
    pub fn new(
        eye: Vec3,
        target: Vec3,
        aspect: f32,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Camera placed at the configured "far" preset.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        let pose = CameraPose::from_arrays(options.far_eye, options.far_target);
        Self::new(
            pose.eye,
            pose.target,
            aspect,
            options.fovy,
            options.znear,
            options.zfar,
        )
    }

    /// Current eye and target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            target: self.target,
        }
    }

    /// Overwrite eye and target.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.eye;
        self.target = pose.target;
    }

    /// Track a canvas resize. Zero-sized canvases keep the old aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// View-to-clip matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh maps depth to [0, 1]
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates.
    #[must_use]
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.build_matrix().inverse();
        let far = inv.project_point3(ndc.extend(1.0));
        Ray::from_points(self.eye, far)
    }

    /// Project a world point to normalized device coordinates. `None` when
    /// the point is behind the eye.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.build_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(clip.x, clip.y) / clip.w;
        ndc.is_finite().then_some(ndc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 2.0, 8.0), Vec3::ZERO, 1.5, 45.0, 0.1, 100.0)
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_through_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn project_inverts_ray() {
        let cam = camera();
        let ndc = Vec2::new(0.3, -0.4);
        let point = cam.ray_through_ndc(ndc).at(5.0);
        let back = cam.project(point).unwrap();
        assert!(back.abs_diff_eq(ndc, 1e-4), "{back:?}");
    }

    #[test]
    fn points_behind_eye_do_not_project() {
        let cam = camera();
        assert!(cam.project(Vec3::new(0.0, 2.0, 20.0)).is_none());
    }

    #[test]
    fn pose_round_trip() {
        let mut cam = camera();
        let pose = CameraPose::from_arrays([1.0, 2.0, 3.0], [0.0, 1.0, 0.0]);
        cam.set_pose(pose);
        assert_eq!(cam.pose(), pose);
        assert!(cam.pose().abs_diff_eq(&pose, 0.0));
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut cam = camera();
        cam.resize(800, 0);
        assert_eq!(cam.aspect, 1.5);
        cam.resize(800, 400);
        assert_eq!(cam.aspect, 2.0);
    }
}
