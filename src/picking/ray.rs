//! Rays, boxes, and the slab intersection test used for click picking.

use glam::{Mat4, Vec3};

/// A half-line used for picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point.
    pub origin: Vec3,
    /// Ray direction. Unit length for world rays; may be scaled after
    /// [`transformed`](Self::transformed).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction.
    #[inline]
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray from `start` through `end`.
    #[inline]
    #[must_use]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Map the ray through an affine matrix without renormalizing, so ray
    /// parameters stay comparable with the untransformed ray.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create from min and max corners.
    #[inline]
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents.
    #[inline]
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `min <= max` on every axis and all corners are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.cmple(self.max).all()
    }
}

/// Ray-AABB intersection using the slab method.
///
/// Returns the ray parameter of the first intersection at or in front of
/// the origin (the exit point when the origin is inside the box), or
/// `None` on a miss.
#[must_use]
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = ray.direction.recip();

    let t1 = (aabb.min - ray.origin) * inv_dir;
    let t2 = (aabb.max - ray.origin) * inv_dir;

    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    // NaN from a zero direction component lying on a slab face fails both
    // comparisons below and is treated as a miss.
    let hit = tmax >= 0.0 && tmin <= tmax;
    if !hit {
        return None;
    }
    Some(if tmin < 0.0 { tmax } else { tmin })
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        let t = ray_aabb(&ray, &unit_box()).unwrap();
        assert!((t - 4.0).abs() < 1e-6);
    }

    #[test]
    fn miss_beside_box() {
        let ray = Ray::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::X);
        assert!(ray_aabb(&ray, &unit_box()).is_none());
    }

    #[test]
    fn origin_inside_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_aabb(&ray, &unit_box()).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn box_behind_origin_is_missed() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(ray_aabb(&ray, &unit_box()).is_none());
    }

    #[test]
    fn transformed_ray_keeps_parameterization() {
        let world = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let local_to_world = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(0.3),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let local = world.transformed(&local_to_world.inverse());
        let t = ray_aabb(&local, &unit_box()).unwrap();
        let hit = world.at(t);
        // Box of half-size 2 centered at z=1, rotated slightly about Y.
        assert!(hit.z > 2.0 && hit.z < 4.0, "hit {hit:?}");
    }

    #[test]
    fn validity() {
        assert!(unit_box().is_valid());
        assert!(!Aabb::new(Vec3::ONE, Vec3::ZERO).is_valid());
        assert_eq!(unit_box().center(), Vec3::ZERO);
    }
}
