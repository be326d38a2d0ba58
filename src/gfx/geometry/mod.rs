//! # Procedural Geometry
//!
//! Index-based polyhedral meshes, procedural generators for primitive
//! solids, and normal derivation.
//!
//! A [`Mesh`] holds shared vertex positions plus triangular faces that
//! index into them. Renderer-facing code never consumes a mesh directly;
//! it consumes the flattened raw buffers produced here (one position per
//! face corner for filled topology, one position pair per edge for
//! wireframe topology).

pub mod normals;
pub mod primitives;

pub use normals::{face_normals, flat_vertex_normals, smooth_vertex_normals};
pub use primitives::{generate_box, generate_cone, generate_icosahedron, generate_sphere};

use crate::error::{Error, Result};

/// An indexed triangle mesh: vertex positions plus faces of vertex indices.
///
/// Invariant: every index in every face is strictly less than the vertex
/// count. Generators uphold this by construction; caller-supplied meshes
/// are checked before any buffer is derived, so a violation surfaces as
/// [`Error::IndexOutOfRange`] instead of an out-of-bounds read.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z).
    pub vertices: Vec<[f32; 3]>,
    /// Triangular faces as ordered triples of vertex indices.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates a mesh from vertex positions and faces.
    pub fn new(vertices: Vec<[f32; 3]>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangular faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Checks the face-index invariant.
    pub fn validate(&self) -> Result<()> {
        validate_indices(&self.vertices, &self.faces)
    }

    /// Flattens the mesh into a raw position array arranged as filled
    /// triangles: three positions per face, in face order.
    pub fn to_triangle_list(&self) -> Result<Vec<f32>> {
        flatten_triangles(&self.vertices, &self.faces)
    }

    /// Flattens the mesh into a raw position array arranged as line
    /// segments: each face's edges, including the wrap-around edge from
    /// its last vertex back to its first.
    pub fn to_line_list(&self) -> Result<Vec<f32>> {
        flatten_lines(&self.vertices, &self.faces)
    }
}

pub(crate) fn validate_indices(points: &[[f32; 3]], faces: &[[u32; 3]]) -> Result<()> {
    for face in faces {
        for &index in face {
            if index as usize >= points.len() {
                return Err(Error::IndexOutOfRange {
                    index: index as usize,
                    vertex_count: points.len(),
                });
            }
        }
    }
    Ok(())
}

/// Flattens indexed triples into a raw triangle array. Shared between
/// positions and per-vertex color lists, which follow the same indexing
/// convention.
pub(crate) fn flatten_triangles(points: &[[f32; 3]], faces: &[[u32; 3]]) -> Result<Vec<f32>> {
    validate_indices(points, faces)?;

    let mut result = Vec::with_capacity(faces.len() * 9);
    for face in faces {
        for &index in face {
            result.extend_from_slice(&points[index as usize]);
        }
    }
    Ok(result)
}

/// Flattens indexed triples into a raw line-segment array: for each face,
/// one segment per edge, wrapping from the last vertex back to the first.
pub(crate) fn flatten_lines(points: &[[f32; 3]], faces: &[[u32; 3]]) -> Result<Vec<f32>> {
    validate_indices(points, faces)?;

    let mut result = Vec::with_capacity(faces.len() * 18);
    for face in faces {
        for i in 0..face.len() {
            result.extend_from_slice(&points[face[i] as usize]);
            result.extend_from_slice(&points[face[(i + 1) % face.len()] as usize]);
        }
    }
    Ok(result)
}
