//! # Scene Graph
//!
//! Drawable objects, composite groups, and the top-level [`Scene`]
//! collection. A node is either an [`Object`] (mesh + material + derived
//! raw buffers) or a [`Group`] (children + its own local transform); both
//! compose hierarchical transforms through the same primitive, so draw
//! traversal and any spatial query agree on placement.

pub mod group;
pub mod object;
pub mod scene;

pub use group::Group;
pub use object::{Aabb, DrawCommand, DrawMode, Material, NormalMode, Object};
pub use scene::Scene;

use crate::math::Mat4;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a scene node, used for removal from groups and scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        NodeId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Composes a node's local transform from its placement fields.
///
/// The order is fixed and must not be rearranged: scale, then rotation
/// about X, Y, Z in that sequence, then translation, each new factor
/// multiplied on the RIGHT of the accumulated matrix. Rotation angles
/// are Euler degrees.
pub fn compose_local(position: [f32; 3], rotation: [f32; 3], scale: [f32; 3]) -> Mat4 {
    let mut local = Mat4::identity();
    local = local.multiply(&Mat4::scaling(scale[0], scale[1], scale[2]));

    let rotation_x = Mat4::rotation(rotation[0], 1.0, 0.0, 0.0);
    let rotation_y = Mat4::rotation(rotation[1], 0.0, 1.0, 0.0);
    let rotation_z = Mat4::rotation(rotation[2], 0.0, 0.0, 1.0);
    let rotation = rotation_x.multiply(&rotation_y).multiply(&rotation_z);
    local = local.multiply(&rotation);

    local.multiply(&Mat4::translation(position[0], position[1], position[2]))
}

/// A node in the scene tree: a drawable leaf or a composite group.
///
/// The tree is acyclic by construction: groups own their children, so no
/// node can be its own ancestor and traversal needs no cycle handling.
#[derive(Debug)]
pub enum SceneNode {
    Object(Object),
    Group(Group),
}

impl SceneNode {
    /// The node's identity.
    pub fn id(&self) -> NodeId {
        match self {
            SceneNode::Object(object) => object.id(),
            SceneNode::Group(group) => group.id(),
        }
    }

    /// Composes this node's world transform: `parent x local`.
    pub fn world_transform(&self, parent: &Mat4) -> Mat4 {
        match self {
            SceneNode::Object(object) => object.world_transform(parent),
            SceneNode::Group(group) => group.world_transform(parent),
        }
    }

    /// Appends this node's draw commands (recursively for groups) given
    /// the parent's already-composed world matrix.
    pub fn collect_draw_commands<'a>(&'a self, parent: &Mat4, out: &mut Vec<DrawCommand<'a>>) {
        match self {
            SceneNode::Object(object) => {
                let world = object.world_transform(parent);
                out.push(object.emit_draw_command(world));
            }
            SceneNode::Group(group) => group.collect_draw_commands(parent, out),
        }
    }

    /// Borrows the drawable object, if this node is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            SceneNode::Object(object) => Some(object),
            SceneNode::Group(_) => None,
        }
    }

    /// Mutably borrows the drawable object, if this node is one.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            SceneNode::Object(object) => Some(object),
            SceneNode::Group(_) => None,
        }
    }

    /// Borrows the group, if this node is one.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            SceneNode::Group(group) => Some(group),
            SceneNode::Object(_) => None,
        }
    }

    /// Mutably borrows the group, if this node is one.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            SceneNode::Group(group) => Some(group),
            SceneNode::Object(_) => None,
        }
    }
}

impl From<Object> for SceneNode {
    fn from(object: Object) -> Self {
        SceneNode::Object(object)
    }
}

impl From<Group> for SceneNode {
    fn from(group: Group) -> Self {
        SceneNode::Group(group)
    }
}
