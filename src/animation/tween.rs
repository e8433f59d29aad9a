//! Time-bounded eased interpolation between two values.

use glam::Vec3;
use web_time::Duration;

use crate::camera::core::CameraPose;
use crate::util::easing::EasingFunction;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `other` by `t` in [0, 1].
    #[must_use]
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Lerp for CameraPose {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        CameraPose {
            eye: self.eye.lerp(other.eye, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

/// One in-flight interpolation.
///
/// Once `elapsed >= duration` the tween reports `to` exactly, never a
/// float-rounded approximation of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween that has not started advancing yet.
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.as_secs_f32(),
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start_value(&self) -> T {
        self.from
    }

    /// End value.
    #[must_use]
    pub fn end_value(&self) -> T {
        self.to
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        self.duration
    }

    /// Normalized elapsed time in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the tween has reached its end value.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.evaluate(self.progress()))
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }
}
