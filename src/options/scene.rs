use serde::{Deserialize, Serialize};

/// Node-name rules used once, at scene bootstrap, to build the role table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SceneRules {
    /// Name of the left door's hinge pivot.
    pub left_door_pivot: String,
    /// Name of the right door's hinge pivot.
    pub right_door_pivot: String,
    /// Name of the clickable left door panel.
    pub left_door_panel: String,
    /// Name of the clickable right door panel.
    pub right_door_panel: String,
    /// Meshes whose names start with this receive the body material.
    pub body_prefix: String,
    /// Meshes whose names start with this receive the glass material.
    pub glass_prefix: String,
}

impl Default for SceneRules {
    fn default() -> Self {
        Self {
            left_door_pivot: "door_pivot_left".into(),
            right_door_pivot: "door_pivot_right".into(),
            left_door_panel: "body_door_left".into(),
            right_door_panel: "body_door_right".into(),
            body_prefix: "body".into(),
            glass_prefix: "glass".into(),
        }
    }
}
