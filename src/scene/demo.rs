//! Procedural stand-in for the decoded car asset.
//!
//! The car faces -Z with its left flank on +X. Each door hangs from a
//! pivot at its front edge; the panel and its window are children of the
//! pivot so rotating the pivot swings the whole door.

use glam::Vec3;

use super::{NodeId, Scene, Transform};
use crate::error::ShowroomError;
use crate::picking::ray::Aabb;

/// Half-width of the body shell; door panels sit just outside it.
const SHELL_HALF_WIDTH: f32 = 0.85;
/// X offset of each door hinge from the centerline.
const HINGE_X: f32 = 0.92;
/// Z position of the hinges (front edge of the doors).
const HINGE_Z: f32 = -0.9;
/// Door length along Z from the hinge.
const DOOR_LENGTH: f32 = 1.1;

fn aabb(min: [f32; 3], max: [f32; 3]) -> Aabb {
    Aabb::new(Vec3::from(min), Vec3::from(max))
}

/// Build the showroom car: body panels, glass, two hinged doors, wheels.
pub fn demo_car() -> Result<Scene, ShowroomError> {
    let mut scene = Scene::new();
    let car = scene.add_group("car", None, Transform::IDENTITY)?;

    let _ = scene.add_mesh(
        "body_shell",
        Some(car),
        Transform::IDENTITY,
        aabb(
            [-SHELL_HALF_WIDTH, 0.2, -2.1],
            [SHELL_HALF_WIDTH, 1.0, 2.1],
        ),
    )?;
    let _ = scene.add_mesh(
        "body_roof",
        Some(car),
        Transform::IDENTITY,
        aabb([-0.75, 1.3, -1.0], [0.75, 1.4, 0.8]),
    )?;
    let _ = scene.add_mesh(
        "glass_windshield",
        Some(car),
        Transform::IDENTITY,
        aabb([-0.75, 1.0, -1.3], [0.75, 1.3, -1.0]),
    )?;
    let _ = scene.add_mesh(
        "glass_rear",
        Some(car),
        Transform::IDENTITY,
        aabb([-0.75, 1.0, 0.8], [0.75, 1.3, 1.05]),
    )?;

    let _ = add_door(&mut scene, car, "left", HINGE_X)?;
    let _ = add_door(&mut scene, car, "right", -HINGE_X)?;

    for (name, x, z) in [
        ("wheel_front_left", 0.8, -1.35),
        ("wheel_front_right", -0.8, -1.35),
        ("wheel_rear_left", 0.8, 1.35),
        ("wheel_rear_right", -0.8, 1.35),
    ] {
        let _ = scene.add_mesh(
            name,
            Some(car),
            Transform::from_translation(Vec3::new(x, 0.33, z)),
            Aabb::from_center_half_extents(
                Vec3::ZERO,
                Vec3::new(0.12, 0.33, 0.33),
            ),
        )?;
    }

    Ok(scene)
}

/// Add a door pivot with its panel and window; returns the pivot.
fn add_door(
    scene: &mut Scene,
    car: NodeId,
    side: &str,
    hinge_x: f32,
) -> Result<NodeId, ShowroomError> {
    let pivot = scene.add_group(
        &format!("door_pivot_{side}"),
        Some(car),
        Transform::from_translation(Vec3::new(hinge_x, 0.0, HINGE_Z)),
    )?;
    let _ = scene.add_mesh(
        &format!("body_door_{side}"),
        Some(pivot),
        Transform::IDENTITY,
        aabb([-0.04, 0.25, 0.0], [0.04, 1.0, DOOR_LENGTH]),
    )?;
    let _ = scene.add_mesh(
        &format!("glass_door_{side}"),
        Some(pivot),
        Transform::IDENTITY,
        aabb([-0.02, 1.0, 0.05], [0.02, 1.3, DOOR_LENGTH - 0.1]),
    )?;
    Ok(pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doors_sit_outside_the_shell() {
        let scene = demo_car().unwrap();
        let panel = scene.find_by_name("body_door_left").unwrap();
        let world = scene.world_transform(panel);
        let bounds = scene.node(panel).unwrap().mesh().unwrap().bounds;
        let inner_face = world.transform_point3(bounds.min);
        assert!(inner_face.x > SHELL_HALF_WIDTH);
    }

    #[test]
    fn door_parts_hang_from_pivots() {
        let scene = demo_car().unwrap();
        for side in ["left", "right"] {
            let pivot = scene.find_by_name(&format!("door_pivot_{side}")).unwrap();
            let children = scene.node(pivot).unwrap().children();
            assert_eq!(children.len(), 2);
        }
        assert_eq!(scene.meshes().len(), 12);
    }
}
