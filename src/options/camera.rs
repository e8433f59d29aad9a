use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit, and walk-up transition parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position of the "backed away" preset.
    #[schemars(skip)]
    pub far_eye: [f32; 3],
    /// Look-at target of the "backed away" preset.
    #[schemars(skip)]
    pub far_target: [f32; 3],
    /// Eye position of the "walked up" preset.
    #[schemars(skip)]
    pub near_eye: [f32; 3],
    /// Look-at target of the "walked up" preset.
    #[schemars(skip)]
    pub near_target: [f32; 3],
    /// Duration of a near/far transition in milliseconds.
    #[schemars(title = "Walk Duration (ms)", range(min = 100.0, max = 5000.0), extend("step" = 50.0))]
    pub transition_ms: u32,
    /// Orbit rotation sensitivity (radians per pixel).
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Fraction of pending orbit motion applied per frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping: f32,
    /// Closest the orbit may get to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the orbit may get from its target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 100.0,
            far_eye: [4.25, 1.4, -4.5],
            far_target: [0.0, 0.5, 0.0],
            near_eye: [2.1, 1.1, -2.2],
            near_target: [0.0, 0.7, 0.0],
            transition_ms: 2000,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            damping: 0.05,
            min_distance: 1.0,
            max_distance: 15.0,
        }
    }
}
