//! Retained scene graph holding the loaded car.
//!
//! Nodes live in an arena owned by [`Scene`] and are addressed by
//! [`NodeId`]. Controllers keep ids, never references, so the graph stays
//! the single owner of every node for the life of the session.

pub mod demo;
pub mod roles;

use glam::{Mat4, Quat, Vec3};

use crate::error::ShowroomError;
use crate::material::SharedMaterial;
use crate::picking::ray::Aabb;

/// Stable index of a node within its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local translation/rotation/scale relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Offset from the parent origin.
    pub translation: Vec3,
    /// Orientation relative to the parent.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// No translation, rotation, or scale.
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Renderable geometry attached to a node.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Local-space bounds; used as the pick volume.
    pub bounds: Aabb,
    /// Shared surface material, assigned at bootstrap.
    pub material: Option<SharedMaterial>,
}

/// What a node is.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Transform-only node (pivots, grouping).
    Group,
    /// Node with geometry.
    Mesh(Mesh),
}

/// One node of the scene graph.
///
/// Links are set by [`Scene`] on insertion and are read-only afterwards,
/// so the graph stays a forest.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Name from the asset; matched once at bootstrap.
    pub name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Whether this node (and so its subtree) is drawn and pickable.
    pub visible: bool,
    /// Group or mesh payload.
    pub kind: NodeKind,
}

impl SceneNode {
    /// Parent node, `None` for roots.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Mesh payload, if this node has geometry.
    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            NodeKind::Group => None,
        }
    }
}

/// Arena-backed scene graph.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a transform-only node.
    pub fn add_group(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform,
    ) -> Result<NodeId, ShowroomError> {
        self.insert(name, parent, transform, NodeKind::Group)
    }

    /// Add a mesh node with local-space `bounds` and no material.
    pub fn add_mesh(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform,
        bounds: Aabb,
    ) -> Result<NodeId, ShowroomError> {
        if !bounds.is_valid() {
            return Err(ShowroomError::SceneBuild(format!(
                "mesh '{name}' has inverted or non-finite bounds"
            )));
        }
        let mesh = Mesh {
            bounds,
            material: None,
        };
        self.insert(name, parent, transform, NodeKind::Mesh(mesh))
    }

    fn insert(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform,
        kind: NodeKind,
    ) -> Result<NodeId, ShowroomError> {
        let id = NodeId(self.nodes.len() as u32);
        match parent {
            Some(p) => {
                let parent_node = self.nodes.get_mut(p.index()).ok_or_else(|| {
                    ShowroomError::SceneBuild(format!(
                        "parent {p:?} of '{name}' does not exist"
                    ))
                })?;
                parent_node.children.push(id);
            }
            None => self.roots.push(id),
        }
        self.nodes.push(SceneNode {
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            transform,
            visible: true,
            kind,
        });
        Ok(id)
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Mutable node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// First node (in traversal order) with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.traverse()
            .into_iter()
            .find(|&id| self.nodes[id.index()].name == name)
    }

    /// Depth-first traversal, parents before children.
    #[must_use]
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.index()].children.iter().rev());
        }
        order
    }

    /// Local-to-world matrix composed through every ancestor.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.node(current) else {
                break;
            };
            matrix = node.transform.to_matrix() * matrix;
            cursor = node.parent;
        }
        matrix
    }

    /// Whether the node and all of its ancestors are visible.
    #[must_use]
    pub fn is_visible_in_hierarchy(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.node(current) {
                Some(node) if node.visible => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Overwrite a node's local rotation. Unknown ids are ignored.
    pub fn set_rotation(&mut self, id: NodeId, rotation: Quat) {
        if let Some(node) = self.node_mut(id) {
            node.transform.rotation = rotation;
        }
    }

    /// Attach a shared material to a mesh node. Returns `false` for groups
    /// and unknown ids.
    pub fn assign_material(
        &mut self,
        id: NodeId,
        material: SharedMaterial,
    ) -> bool {
        match self.node_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Mesh(mesh)) => {
                mesh.material = Some(material);
                true
            }
            _ => false,
        }
    }

    /// Ids of every mesh node, in traversal order.
    #[must_use]
    pub fn meshes(&self) -> Vec<NodeId> {
        self.traverse()
            .into_iter()
            .filter(|&id| self.nodes[id.index()].mesh().is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn small_box() -> Aabb {
        Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    #[test]
    fn traversal_is_depth_first() {
        let mut scene = Scene::new();
        let a = scene.add_group("a", None, Transform::IDENTITY).unwrap();
        let b = scene.add_group("b", Some(a), Transform::IDENTITY).unwrap();
        let c = scene.add_group("c", None, Transform::IDENTITY).unwrap();
        let d = scene.add_mesh("d", Some(b), Transform::IDENTITY, small_box()).unwrap();
        assert_eq!(scene.traverse(), vec![a, b, d, c]);
        assert_eq!(scene.meshes(), vec![d]);
        assert_eq!(scene.find_by_name("d"), Some(d));
        assert_eq!(scene.find_by_name("missing"), None);
    }

    #[test]
    fn world_transform_composes_parents() {
        let mut scene = Scene::new();
        let pivot = scene
            .add_group("pivot", None, Transform::from_translation(Vec3::X))
            .unwrap();
        let child = scene
            .add_mesh(
                "child",
                Some(pivot),
                Transform::from_translation(Vec3::Z),
                small_box(),
            )
            .unwrap();
        scene.set_rotation(pivot, Quat::from_rotation_y(FRAC_PI_2));

        let origin = scene.world_transform(child).transform_point3(Vec3::ZERO);
        // +Z rotated a quarter turn about Y lands on +X.
        assert!((origin - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut scene = Scene::new();
        let err = scene
            .add_group("orphan", Some(NodeId(7)), Transform::IDENTITY)
            .unwrap_err();
        assert!(matches!(err, ShowroomError::SceneBuild(_)));
        assert!(scene.is_empty());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut scene = Scene::new();
        let bad = Aabb::new(Vec3::ONE, Vec3::ZERO);
        assert!(scene.add_mesh("bad", None, Transform::IDENTITY, bad).is_err());
    }

    #[test]
    fn hidden_ancestor_hides_subtree() {
        let mut scene = Scene::new();
        let root = scene.add_group("root", None, Transform::IDENTITY).unwrap();
        let mesh = scene
            .add_mesh("m", Some(root), Transform::IDENTITY, small_box())
            .unwrap();
        assert!(scene.is_visible_in_hierarchy(mesh));
        scene.node_mut(root).unwrap().visible = false;
        assert!(!scene.is_visible_in_hierarchy(mesh));
    }

    #[test]
    fn links_follow_insertion() {
        let mut scene = Scene::new();
        let root = scene.add_group("root", None, Transform::IDENTITY).unwrap();
        let a = scene.add_group("a", Some(root), Transform::IDENTITY).unwrap();
        let b = scene
            .add_mesh("b", Some(root), Transform::IDENTITY, small_box())
            .unwrap();
        let root_node = scene.node(root).unwrap();
        assert_eq!(root_node.parent(), None);
        assert_eq!(root_node.children(), &[a, b]);
        assert_eq!(scene.node(b).unwrap().parent(), Some(root));

        // Editing a node through `node_mut` leaves its links intact.
        scene.node_mut(b).unwrap().visible = false;
        assert_eq!(scene.traverse(), vec![root, a, b]);
    }

    #[test]
    fn materials_only_attach_to_meshes() {
        use crate::material::{MaterialParams, SharedMaterial};

        let mut scene = Scene::new();
        let group = scene.add_group("g", None, Transform::IDENTITY).unwrap();
        let mesh = scene
            .add_mesh("m", Some(group), Transform::IDENTITY, small_box())
            .unwrap();
        let paint = SharedMaterial::new("body", MaterialParams::body_paint());
        assert!(!scene.assign_material(group, paint.clone()));
        assert!(scene.assign_material(mesh, paint.clone()));
        let attached = scene.node(mesh).unwrap().mesh().unwrap();
        assert!(attached.material.as_ref().unwrap().ptr_eq(&paint));
    }
}
