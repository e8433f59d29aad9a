use super::command::ShowroomCommand;
use super::renderer::Renderer;
use super::ShowroomEngine;
use crate::camera::CameraRequest;
use crate::doors::{DoorSide, DoorToggle};
use crate::panel::{bind_material_panel, ControlPanel, FolderId};

/// Result of a pointer click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Nothing under the pointer, or the canvas has no size.
    Miss,
    /// Something was hit, but it is not a door panel.
    NotClickable,
    /// A door panel was hit and its toggle request produced `toggle`.
    Door {
        /// The door whose panel was hit.
        side: DoorSide,
        /// What the door state machine did with the request.
        toggle: DoorToggle,
    },
}

impl<R: Renderer> ShowroomEngine<R> {
    /// Execute a single command.
    pub fn execute(&mut self, command: ShowroomCommand) {
        match command {
            ShowroomCommand::Click { x, y } => {
                let _ = self.click(x, y);
            }
            ShowroomCommand::Orbit { delta } => self.orbit.rotate(delta),
            ShowroomCommand::Zoom { delta } => self.orbit.zoom(delta),
            ShowroomCommand::MoveNear => {
                let _ = self.move_near();
            }
            ShowroomCommand::MoveFar => {
                let _ = self.move_far();
            }
            ShowroomCommand::ToggleCamera => {
                let _ = self.toggle_camera();
            }
            ShowroomCommand::ToggleDoor(side) => {
                let _ = self.toggle_door(side);
            }
            ShowroomCommand::Resize { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Hit-test a click at canvas pixel `(x, y)` and toggle the door whose
    /// panel was struck. Misses and non-door hits change nothing.
    pub fn click(&mut self, x: f32, y: f32) -> ClickOutcome {
        let Some(hit) = self.hit_tester.pick_pixel(&self.scene, &self.camera, x, y)
        else {
            log::debug!("click at ({x}, {y}) hit nothing");
            return ClickOutcome::Miss;
        };
        let Some(side) = self.roles.door_for(hit.node) else {
            log::debug!("click at ({x}, {y}) hit non-clickable {:?}", hit.node);
            return ClickOutcome::NotClickable;
        };
        ClickOutcome::Door {
            side,
            toggle: self.doors.toggle(side, &mut self.scheduler),
        }
    }

    /// Toggle a door directly. A side without a pivot in the mounted scene
    /// is ignored.
    pub fn toggle_door(&mut self, side: DoorSide) -> Option<DoorToggle> {
        if self.roles.pivot(side).is_none() {
            log::debug!("{side:?} door has no pivot; toggle ignored");
            return None;
        }
        Some(self.doors.toggle(side, &mut self.scheduler))
    }

    /// Walk the camera up to the car.
    pub fn move_near(&mut self) -> CameraRequest {
        self.camera_transition
            .move_near(&self.camera, &mut self.scheduler)
    }

    /// Back the camera away from the car.
    pub fn move_far(&mut self) -> CameraRequest {
        self.camera_transition
            .move_far(&self.camera, &mut self.scheduler)
    }

    /// Walk up or back away, whichever is valid.
    pub fn toggle_camera(&mut self) -> CameraRequest {
        self.camera_transition
            .toggle(&self.camera, &mut self.scheduler)
    }

    /// Track a canvas resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.hit_tester.resize(width, height);
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Add "Body" and "Glass" folders to `panel`, each bound to its shared
    /// material. Returns the `(body, glass)` folder ids.
    pub fn bind_panel(&self, panel: &mut dyn ControlPanel) -> (FolderId, FolderId) {
        let body = bind_material_panel(panel, "Body", self.materials.body());
        let glass = bind_material_panel(panel, "Glass", self.materials.glass());
        (body, glass)
    }
}
