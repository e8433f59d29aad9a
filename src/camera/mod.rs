//! Camera system for the showroom.
//!
//! Provides the perspective camera, damped orbit controls, and the
//! near/far walk transition.

/// Core camera struct, pose, and projection helpers.
pub mod core;
/// Damped orbit controls driven by drag and scroll.
pub mod orbit;
/// Near/far camera walk state machine.
pub mod transition;

pub use self::core::{Camera, CameraPose};
pub use orbit::OrbitControls;
pub use transition::{CameraMode, CameraRequest, CameraTransition};
