//! Shared utilities: easing curves and the frame clock.

pub mod easing;
/// Per-frame clock with FPS smoothing and delta clamping.
pub mod frame_timing;
