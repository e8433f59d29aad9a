use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Doors", inline)]
#[serde(default)]
/// Door swing parameters shared by both doors.
pub struct DoorOptions {
    /// Swing angle of a fully open door, in degrees.
    #[schemars(title = "Open Angle", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub open_angle_deg: f32,
    /// Duration of one open or close swing in milliseconds.
    #[schemars(title = "Swing Duration (ms)", range(min = 100.0, max = 3000.0), extend("step" = 50.0))]
    pub duration_ms: u32,
    /// Hinge axis in pivot-local space.
    #[schemars(skip)]
    pub hinge_axis: [f32; 3],
    /// Swing the right door the opposite way so both open outward.
    #[schemars(skip)]
    pub mirror_right: bool,
    /// Easing curve for the swing.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            open_angle_deg: 60.0,
            duration_ms: 1000,
            hinge_axis: [0.0, 1.0, 0.0],
            mirror_right: true,
            easing: EasingFunction::QuadraticOut,
        }
    }
}
