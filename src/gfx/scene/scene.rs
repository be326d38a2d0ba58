//! The top-level scene: an ordered, mutable collection of nodes.
//!
//! The external render driver walks the scene once per frame, asking
//! every top-level node for its draw commands with the identity matrix
//! as the initial parent transform. Insertion order is draw order; the
//! renderer relies on the depth test, not on draw order, for visibility.

use super::{DrawCommand, NodeId, SceneNode};
use crate::math::Mat4;

/// An ordered collection of top-level scene nodes.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a top-level node, returning its id.
    pub fn add(&mut self, node: impl Into<SceneNode>) -> NodeId {
        let node = node.into();
        let id = node.id();
        log::debug!("scene: added node {id:?}");
        self.nodes.push(node);
        id
    }

    /// Removes a top-level node by identity. Returns the removed node,
    /// or `None` (a no-op) when no top-level node has that id.
    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        let index = self.nodes.iter().position(|node| node.id() == id)?;
        log::debug!("scene: removed node {id:?}");
        Some(self.nodes.remove(index))
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the top-level nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SceneNode> {
        self.nodes.iter()
    }

    /// Mutably iterates the top-level nodes in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SceneNode> {
        self.nodes.iter_mut()
    }

    /// Borrows a top-level node by identity.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Mutably borrows a top-level node by identity.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }

    /// Collects every drawable's draw command for this frame, walking
    /// top-level nodes in insertion order with the identity parent
    /// transform. Called once per frame by the external render driver.
    pub fn draw_commands(&self) -> Vec<DrawCommand<'_>> {
        let identity = Mat4::identity();
        let mut commands = Vec::new();
        for node in &self.nodes {
            node.collect_draw_commands(&identity, &mut commands);
        }
        commands
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneNode;
    type IntoIter = std::slice::Iter<'a, SceneNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
