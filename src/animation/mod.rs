//! Tween-based animation for door swings and camera walks.

pub mod scheduler;
pub mod tween;

pub use scheduler::{Animated, AnimationHandle, AnimationSample, AnimationScheduler};
pub use tween::{Lerp, Tween};
