use serde::{Deserialize, Serialize};

use crate::doors::DoorSide;
use crate::engine::command::ShowroomCommand;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_near = "KeyN"
/// toggle_left_door = "KeyL"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk the camera up to the car.
    MoveNear,
    /// Back the camera away from the car.
    MoveFar,
    /// Whichever of near/far is currently valid.
    ToggleCamera,
    /// Open or close the left door.
    ToggleLeftDoor,
    /// Open or close the right door.
    ToggleRightDoor,
}

impl KeyAction {
    /// The command this action issues.
    #[must_use]
    pub fn to_command(self) -> ShowroomCommand {
        match self {
            Self::MoveNear => ShowroomCommand::MoveNear,
            Self::MoveFar => ShowroomCommand::MoveFar,
            Self::ToggleCamera => ShowroomCommand::ToggleCamera,
            Self::ToggleLeftDoor => ShowroomCommand::ToggleDoor(DoorSide::Left),
            Self::ToggleRightDoor => {
                ShowroomCommand::ToggleDoor(DoorSide::Right)
            }
        }
    }
}
