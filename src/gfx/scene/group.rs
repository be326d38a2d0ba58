//! Composite scene nodes.
//!
//! A [`Group`] owns an ordered list of child nodes plus its own local
//! placement, and nothing else: no mesh, no buffers. Its world transform
//! feeds every child as the new parent matrix, which is how nested
//! hierarchies (a turret group atop a vehicle group) accumulate
//! transforms.

use super::{compose_local, DrawCommand, NodeId, SceneNode};
use crate::math::Mat4;

/// A composite node holding child nodes and a local transform.
#[derive(Debug)]
pub struct Group {
    id: NodeId,
    children: Vec<SceneNode>,

    /// Translation, applied last in the local transform.
    pub position: [f32; 3],
    /// Euler angles in degrees, applied about X, then Y, then Z.
    pub rotation: [f32; 3],
    /// Per-axis scale, applied first in the local transform.
    pub scale: [f32; 3],
}

impl Group {
    /// Creates an empty group at the origin.
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            children: Vec::new(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    /// Sets the position, builder style.
    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation (Euler degrees), builder style.
    pub fn with_rotation(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the per-axis scale, builder style.
    pub fn with_scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }

    /// The node's identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Appends a child node, returning its id.
    pub fn add_child(&mut self, child: impl Into<SceneNode>) -> NodeId {
        let child = child.into();
        let id = child.id();
        self.children.push(child);
        id
    }

    /// Removes a direct child by identity. Returns the removed node, or
    /// `None` (a no-op) when no direct child has that id.
    pub fn remove_child(&mut self, id: NodeId) -> Option<SceneNode> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        Some(self.children.remove(index))
    }

    /// The children in insertion order.
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    /// Composes this group's world transform: `parent x local`.
    pub fn world_transform(&self, parent: &Mat4) -> Mat4 {
        parent.multiply(&compose_local(self.position, self.rotation, self.scale))
    }

    /// Composes this group's world transform, then recursively collects
    /// every descendant's draw command with it as the new parent matrix.
    pub fn collect_draw_commands<'a>(&'a self, parent: &Mat4, out: &mut Vec<DrawCommand<'a>>) {
        let world = self.world_transform(parent);
        for child in &self.children {
            child.collect_draw_commands(&world, out);
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}
