use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Host frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
pub struct FrameOptions {
    /// Target frames per second (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}
