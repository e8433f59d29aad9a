//! Typed role lookup built once from node names.
//!
//! After [`RoleTable::build`] nothing compares node names again: clicks
//! resolve through `NodeId` keys only.

use rustc_hash::FxHashMap;

use super::{NodeId, Scene};
use crate::doors::DoorSide;
use crate::options::SceneRules;

/// The closed set of roles a node can play in the showroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Hinge pivot of the left door.
    LeftDoor,
    /// Hinge pivot of the right door.
    RightDoor,
    /// Painted body mesh.
    Body,
    /// Glass mesh.
    Glass,
}

impl From<DoorSide> for NodeRole {
    fn from(side: DoorSide) -> Self {
        match side {
            DoorSide::Left => Self::LeftDoor,
            DoorSide::Right => Self::RightDoor,
        }
    }
}

/// Node ids grouped by role, plus the clickable-panel → door table.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    pivots: [Option<NodeId>; 2],
    clickable: FxHashMap<NodeId, DoorSide>,
    body: Vec<NodeId>,
    glass: Vec<NodeId>,
}

impl RoleTable {
    /// Traverse `scene` once and classify nodes by `rules`.
    ///
    /// A door panel is only registered as clickable when its side's pivot
    /// was found too; otherwise clicking it could not move anything.
    #[must_use]
    pub fn build(scene: &Scene, rules: &SceneRules) -> Self {
        let mut table = Self::default();
        let mut panels: [Option<NodeId>; 2] = [None, None];

        for id in scene.traverse() {
            let Some(node) = scene.node(id) else {
                continue;
            };
            let name = node.name.as_str();

            if name == rules.left_door_pivot {
                let _ = table.pivots[DoorSide::Left.index()].get_or_insert(id);
            } else if name == rules.right_door_pivot {
                let _ = table.pivots[DoorSide::Right.index()].get_or_insert(id);
            }
            if name == rules.left_door_panel {
                let _ = panels[DoorSide::Left.index()].get_or_insert(id);
            } else if name == rules.right_door_panel {
                let _ = panels[DoorSide::Right.index()].get_or_insert(id);
            }

            if node.mesh().is_none() {
                continue;
            }
            if name.starts_with(&rules.body_prefix) {
                table.body.push(id);
            } else if name.starts_with(&rules.glass_prefix) {
                table.glass.push(id);
            }
        }

        for side in DoorSide::BOTH {
            match (table.pivots[side.index()], panels[side.index()]) {
                (Some(_), Some(panel)) => {
                    let _ = table.clickable.insert(panel, side);
                }
                (None, _) => {
                    log::warn!("{side:?} door pivot not found; door disabled");
                }
                (Some(_), None) => {
                    log::warn!("{side:?} door panel not found; door unclickable");
                }
            }
        }

        log::debug!(
            "role table: {} body, {} glass, {} clickable doors",
            table.body.len(),
            table.glass.len(),
            table.clickable.len()
        );
        table
    }

    /// Whether bootstrap found nothing at all (no scene loaded yet).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pivots.iter().all(Option::is_none)
            && self.body.is_empty()
            && self.glass.is_empty()
    }

    /// Hinge pivot of a door.
    #[must_use]
    pub fn pivot(&self, side: DoorSide) -> Option<NodeId> {
        self.pivots[side.index()]
    }

    /// Door toggled by clicking `node`, if it is a clickable door panel.
    #[must_use]
    pub fn door_for(&self, node: NodeId) -> Option<DoorSide> {
        self.clickable.get(&node).copied()
    }

    /// All nodes playing `role`.
    #[must_use]
    pub fn nodes(&self, role: NodeRole) -> &[NodeId] {
        match role {
            NodeRole::LeftDoor => {
                self.pivots[DoorSide::Left.index()].as_slice()
            }
            NodeRole::RightDoor => {
                self.pivots[DoorSide::Right.index()].as_slice()
            }
            NodeRole::Body => &self.body,
            NodeRole::Glass => &self.glass,
        }
    }
}
