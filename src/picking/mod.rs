//! CPU ray picking.
//!
//! Converts a click's pixel position into a camera ray and resolves the
//! nearest visible mesh it strikes.

pub mod ray;

pub use hit_test::{pixel_to_ndc, HitTester, PickHit};
pub use ray::{Aabb, Ray};
