//! Drawable objects: mesh + material + derived renderer-ready buffers.
//!
//! An [`Object`] owns its mesh and keeps three raw buffers derived from
//! it: flattened positions, per-vertex normals, and per-vertex colors.
//! The buffers hold object-local static geometry only; placement is
//! applied at draw time through the composed world transform, so writing
//! `position`/`rotation`/`scale` never touches the buffers. Switching
//! topology mode or material regenerates all three synchronously before
//! the setter returns.

use super::{compose_local, NodeId};
use crate::error::Result;
use crate::gfx::geometry::{
    flat_vertex_normals, flatten_lines, flatten_triangles, smooth_vertex_normals, Mesh,
};
use crate::math::Mat4;

/// How an object's color is sourced.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// One RGB triple applied to every vertex.
    Uniform([f32; 3]),
    /// One RGB triple per mesh vertex, indexed exactly like positions.
    /// Supports gradient-shaded or per-vertex-tinted meshes.
    PerVertex(Vec<[f32; 3]>),
}

/// Which normal derivation an object uses for its normal buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalMode {
    /// Per-triangle normals; edges read as sharp.
    Flat,
    /// Vertex-averaged normals; shading reads as continuous.
    Smooth,
}

/// Primitive topology of an object's flattened buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Filled triangles, three vertices per face.
    TriangleList,
    /// Wireframe line segments, two vertices per face edge.
    LineList,
}

/// World-space axis-aligned bounding box for coarse collision testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Aabb {
    /// Pairwise overlap test: on every axis, each box's minimum must lie
    /// strictly below the other's maximum.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| self.min[axis] < other.max[axis] && self.max[axis] > other.min[axis])
    }
}

/// Everything the external renderer needs to draw one object.
///
/// Pure data: producing a draw command performs no graphics-API calls.
/// The buffers borrow from the object, so commands are collected fresh
/// each frame.
#[derive(Debug)]
pub struct DrawCommand<'a> {
    /// Composed object-space-to-world-space transform.
    pub transform: Mat4,
    /// Flattened vertex positions.
    pub vertices: &'a [f32],
    /// Flattened per-vertex normals.
    pub normals: &'a [f32],
    /// Flattened per-vertex colors.
    pub colors: &'a [f32],
    /// Primitive topology of the buffers.
    pub mode: DrawMode,
}

impl DrawCommand<'_> {
    /// Whether the renderer should apply lighting. Wireframe geometry
    /// carries no meaningful normals and must be drawn unlit.
    pub fn is_lit(&self) -> bool {
        self.mode == DrawMode::TriangleList
    }

    /// Byte view of the vertex buffer for backends that upload bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Byte view of the normal buffer.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals)
    }

    /// Byte view of the color buffer.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors)
    }
}

/// A drawable scene node.
#[derive(Debug)]
pub struct Object {
    id: NodeId,
    mesh: Mesh,
    material: Material,
    normal_mode: NormalMode,
    wireframe: bool,
    raw_vertices: Vec<f32>,
    raw_normals: Vec<f32>,
    raw_colors: Vec<f32>,

    /// Translation, applied last in the local transform.
    pub position: [f32; 3],
    /// Euler angles in degrees, applied about X, then Y, then Z.
    pub rotation: [f32; 3],
    /// Per-axis scale, applied first in the local transform.
    pub scale: [f32; 3],
}

impl Object {
    /// Creates an object with flat normals, validating the mesh and
    /// deriving all three raw buffers.
    pub fn new(mesh: Mesh, material: Material) -> Result<Self> {
        Self::with_normal_mode(mesh, material, NormalMode::Flat)
    }

    /// Creates an object with the given normal derivation.
    pub fn with_normal_mode(mesh: Mesh, material: Material, normal_mode: NormalMode) -> Result<Self> {
        let (raw_vertices, raw_normals, raw_colors) =
            build_buffers(&mesh, &material, normal_mode, false)?;

        Ok(Self {
            id: NodeId::next(),
            mesh,
            material,
            normal_mode,
            wireframe: false,
            raw_vertices,
            raw_normals,
            raw_colors,
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        })
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

    /// The owned source mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The current material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The current normal derivation.
    pub fn normal_mode(&self) -> NormalMode {
        self.normal_mode
    }

    /// Whether the object is in wireframe topology.
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// The topology of the derived buffers.
    pub fn draw_mode(&self) -> DrawMode {
        if self.wireframe {
            DrawMode::LineList
        } else {
            DrawMode::TriangleList
        }
    }

    /// The flattened vertex buffer.
    pub fn raw_vertices(&self) -> &[f32] {
        &self.raw_vertices
    }

    /// The flattened normal buffer.
    pub fn raw_normals(&self) -> &[f32] {
        &self.raw_normals
    }

    /// The flattened color buffer.
    pub fn raw_colors(&self) -> &[f32] {
        &self.raw_colors
    }

    /// Switches between filled and wireframe topology, synchronously
    /// regenerating the vertex, color, and normal buffers before
    /// returning. On failure the previous mode and buffers are kept
    /// (stale but consistent).
    pub fn set_wireframe(&mut self, wireframe: bool) -> Result<()> {
        let (raw_vertices, raw_normals, raw_colors) =
            build_buffers(&self.mesh, &self.material, self.normal_mode, wireframe)?;
        self.wireframe = wireframe;
        self.raw_vertices = raw_vertices;
        self.raw_normals = raw_normals;
        self.raw_colors = raw_colors;
        log::debug!(
            "object {:?}: rebuilt buffers for {:?} ({} floats)",
            self.id,
            self.draw_mode(),
            self.raw_vertices.len()
        );
        Ok(())
    }

    /// Replaces the material and synchronously regenerates the derived
    /// buffers.
    pub fn set_material(&mut self, material: Material) -> Result<()> {
        let (raw_vertices, raw_normals, raw_colors) =
            build_buffers(&self.mesh, &material, self.normal_mode, self.wireframe)?;
        self.material = material;
        self.raw_vertices = raw_vertices;
        self.raw_normals = raw_normals;
        self.raw_colors = raw_colors;
        Ok(())
    }

    /// Replaces the normal derivation and synchronously regenerates the
    /// derived buffers.
    pub fn set_normal_mode(&mut self, normal_mode: NormalMode) -> Result<()> {
        let (raw_vertices, raw_normals, raw_colors) =
            build_buffers(&self.mesh, &self.material, normal_mode, self.wireframe)?;
        self.normal_mode = normal_mode;
        self.raw_vertices = raw_vertices;
        self.raw_normals = raw_normals;
        self.raw_colors = raw_colors;
        Ok(())
    }

    /// Composes this object's world transform: `parent x local`, with the
    /// local matrix built by [`compose_local`]'s fixed order.
    pub fn world_transform(&self, parent: &Mat4) -> Mat4 {
        parent.multiply(&compose_local(self.position, self.rotation, self.scale))
    }

    /// Produces the renderer-facing draw command for an already-composed
    /// world transform. Pure data production; no graphics calls.
    pub fn emit_draw_command(&self, world: Mat4) -> DrawCommand<'_> {
        DrawCommand {
            transform: world,
            vertices: &self.raw_vertices,
            normals: &self.raw_normals,
            colors: &self.raw_colors,
            mode: self.draw_mode(),
        }
    }

    /// World-space bounding box from `position +/- scale / 2` per axis.
    /// Rotation is deliberately ignored; this matches the intended use
    /// for coarse collision only.
    pub fn aabb(&self) -> Aabb {
        let mut min = [0.0f32; 3];
        let mut max = [0.0f32; 3];
        for axis in 0..3 {
            min[axis] = self.position[axis] - self.scale[axis] / 2.0;
            max[axis] = self.position[axis] + self.scale[axis] / 2.0;
        }
        Aabb { min, max }
    }

    /// Pairwise AABB collision test against another object.
    pub fn overlaps(&self, other: &Object) -> bool {
        self.aabb().overlaps(&other.aabb())
    }
}

/// Derives all three raw buffers for the given topology. Buffers are
/// committed by the caller only after every derivation succeeded.
fn build_buffers(
    mesh: &Mesh,
    material: &Material,
    normal_mode: NormalMode,
    wireframe: bool,
) -> Result<(Vec<f32>, Vec<f32>, Vec<f32>)> {
    let raw_vertices = if wireframe {
        mesh.to_line_list()?
    } else {
        mesh.to_triangle_list()?
    };

    let raw_normals = match normal_mode {
        NormalMode::Flat => flat_vertex_normals(mesh)?,
        NormalMode::Smooth => smooth_vertex_normals(mesh)?,
    };

    let raw_colors = match material {
        Material::Uniform(color) => {
            let vertex_count = raw_vertices.len() / 3;
            let mut colors = Vec::with_capacity(raw_vertices.len());
            for _ in 0..vertex_count {
                colors.extend_from_slice(color);
            }
            colors
        }
        // Per-vertex colors flow through the same index-based flattening
        // as positions, so a short color list fails fast.
        Material::PerVertex(colors) => {
            if wireframe {
                flatten_lines(colors, &mesh.faces)?
            } else {
                flatten_triangles(colors, &mesh.faces)?
            }
        }
    };

    Ok((raw_vertices, raw_normals, raw_colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_box, generate_sphere};

    fn gray_box() -> Object {
        Object::new(generate_box(), Material::Uniform([0.5, 0.5, 0.5])).unwrap()
    }

    #[test]
    fn test_buffers_derived_on_construction() {
        let object = gray_box();
        // 12 faces * 3 vertices * 3 components.
        assert_eq!(object.raw_vertices().len(), 108);
        assert_eq!(object.raw_normals().len(), 108);
        assert_eq!(object.raw_colors().len(), 108);
        assert_eq!(object.draw_mode(), DrawMode::TriangleList);
    }

    #[test]
    fn test_uniform_color_repeats_per_vertex() {
        let object = Object::new(generate_box(), Material::Uniform([0.1, 0.2, 0.3])).unwrap();
        for color in object.raw_colors().chunks(3) {
            assert_eq!(color, &[0.1, 0.2, 0.3]);
        }
    }

    #[test]
    fn test_per_vertex_colors_follow_face_indexing() {
        let mesh = Mesh::new(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        );
        let colors = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let object = Object::new(mesh, Material::PerVertex(colors)).unwrap();
        assert_eq!(
            object.raw_colors(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_short_per_vertex_color_list_fails() {
        let mesh = Mesh::new(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        );
        let result = Object::new(mesh, Material::PerVertex(vec![[1.0, 0.0, 0.0]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_wireframe_round_trip_reproduces_buffers() {
        let mut object = gray_box();
        let filled_vertices = object.raw_vertices().to_vec();
        let filled_colors = object.raw_colors().to_vec();
        let filled_normals = object.raw_normals().to_vec();

        object.set_wireframe(true).unwrap();
        // 12 faces * 3 edges * 2 endpoints * 3 components.
        assert_eq!(object.raw_vertices().len(), 216);
        assert_eq!(object.draw_mode(), DrawMode::LineList);

        object.set_wireframe(false).unwrap();
        assert_eq!(object.raw_vertices(), filled_vertices.as_slice());
        assert_eq!(object.raw_colors(), filled_colors.as_slice());
        assert_eq!(object.raw_normals(), filled_normals.as_slice());
    }

    #[test]
    fn test_transform_fields_do_not_touch_buffers() {
        let mut object = gray_box();
        let before = object.raw_vertices().to_vec();
        object.position = [4.0, 5.0, 6.0];
        object.rotation = [45.0, 90.0, 10.0];
        object.scale = [2.0, 2.0, 2.0];
        assert_eq!(object.raw_vertices(), before.as_slice());
    }

    #[test]
    fn test_set_material_rebuilds_colors() {
        let mut object = gray_box();
        object.set_material(Material::Uniform([1.0, 0.0, 0.0])).unwrap();
        assert_eq!(&object.raw_colors()[0..3], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_smooth_sphere_normals_are_unit() {
        let object = Object::with_normal_mode(
            generate_sphere(8),
            Material::Uniform([1.0; 3]),
            NormalMode::Smooth,
        )
        .unwrap();
        for n in object.raw_normals().chunks(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_aabb_from_position_and_scale() {
        let object = gray_box()
            .with_position([1.0, 2.0, 3.0])
            .with_scale([4.0, 2.0, 6.0]);
        let aabb = object.aabb();
        assert_eq!(aabb.min, [-1.0, 1.0, 0.0]);
        assert_eq!(aabb.max, [3.0, 3.0, 6.0]);
    }

    #[test]
    fn test_overlap_pairs() {
        let at_origin = gray_box();
        let close = gray_box().with_position([0.5, 0.0, 0.0]);
        let far = gray_box().with_position([2.0, 0.0, 0.0]);

        assert!(at_origin.overlaps(&close));
        assert!(close.overlaps(&at_origin));
        assert!(!at_origin.overlaps(&far));

        // Touching faces do not count as overlap: the test is strict.
        let touching = gray_box().with_position([1.0, 0.0, 0.0]);
        assert!(!at_origin.overlaps(&touching));
    }

    #[test]
    fn test_draw_command_contents() {
        let object = gray_box().with_position([1.0, 0.0, 0.0]);
        let world = object.world_transform(&Mat4::identity());
        let command = object.emit_draw_command(world);

        assert!(command.is_lit());
        assert_eq!(command.vertices.len(), 108);
        assert_eq!(command.vertex_bytes().len(), 108 * 4);
        let origin = command.transform.transform_point([0.0; 3]);
        assert_eq!(origin, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_wireframe_command_is_unlit() {
        let mut object = gray_box();
        object.set_wireframe(true).unwrap();
        let command = object.emit_draw_command(Mat4::identity());
        assert!(!command.is_lit());
        assert_eq!(command.mode, DrawMode::LineList);
    }
}
