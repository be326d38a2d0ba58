//! Normal derivation for indexed meshes.
//!
//! Two shading flavors are derived from the same face data:
//!
//! - flat: every vertex of a triangle receives that triangle's face
//!   normal verbatim, so edges read as sharp (box, icosahedron);
//! - smooth: every occurrence of a vertex index receives the normalized
//!   sum of the face normals of all faces incident to that index, so
//!   shading reads as continuous across shared vertices (sphere, cone).
//!
//! Face normals are intentionally left unnormalized: their magnitude is
//! proportional to face area, which is acceptable for flat per-triangle
//! shading.

use super::Mesh;
use crate::error::Result;
use crate::math::Vector;

/// One unnormalized normal per face: `(v1 - v0) x (v2 - v0)`.
pub fn face_normals(mesh: &Mesh) -> Result<Vec<Vector>> {
    mesh.validate()?;

    let mut normals = Vec::with_capacity(mesh.face_count());
    for face in &mesh.faces {
        let p0 = Vector::from(mesh.vertices[face[0] as usize]);
        let p1 = Vector::from(mesh.vertices[face[1] as usize]);
        let p2 = Vector::from(mesh.vertices[face[2] as usize]);

        let v1 = p1.subtract(&p0)?;
        let v2 = p2.subtract(&p0)?;
        normals.push(v1.cross(&v2)?);
    }
    Ok(normals)
}

/// Flat per-triangle vertex normals as a raw float array: three repeated
/// copies of each face normal, in face order.
pub fn flat_vertex_normals(mesh: &Mesh) -> Result<Vec<f32>> {
    let normals = face_normals(mesh)?;

    let mut result = Vec::with_capacity(mesh.face_count() * 9);
    for normal in &normals {
        for _ in 0..3 {
            result.extend_from_slice(normal.elements());
        }
    }
    Ok(result)
}

/// Smooth vertex-averaged normals as a raw float array.
///
/// For every occurrence of a vertex index across the face list, the
/// result is the unit-normalized, unweighted sum of the face normals of
/// every face whose index list contains that vertex. A face contributes
/// once even if it repeats the index. Incident faces are looked up
/// through an index built once per mesh rather than by rescanning the
/// face list per vertex; the averaging semantics are unchanged.
pub fn smooth_vertex_normals(mesh: &Mesh) -> Result<Vec<f32>> {
    let normals = face_normals(mesh)?;

    // vertex index -> indices of incident faces
    let mut faces_by_vertex: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertex_count()];
    for (face_index, face) in mesh.faces.iter().enumerate() {
        for &vertex_index in face {
            let incident = &mut faces_by_vertex[vertex_index as usize];
            // A degenerate face repeating an index must still count once.
            if incident.last() != Some(&face_index) {
                incident.push(face_index);
            }
        }
    }

    let mut result = Vec::with_capacity(mesh.face_count() * 9);
    for face in &mesh.faces {
        for &vertex_index in face {
            let mut total = Vector::vec3(0.0, 0.0, 0.0);
            for &face_index in &faces_by_vertex[vertex_index as usize] {
                total = total.add(&normals[face_index])?;
            }
            result.extend_from_slice(total.unit().elements());
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_box;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_face_normals_are_unnormalized_crosses() {
        // A right triangle with legs of length 2 has a cross product of
        // magnitude 4, twice its area.
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]],
            vec![[0, 1, 2]],
        );
        let normals = face_normals(&mesh).unwrap();
        assert_eq!(normals.len(), 1);
        assert_eq!(normals[0], Vector::vec3(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_flat_normals_repeat_per_vertex() {
        let cube = generate_box();
        let flat = flat_vertex_normals(&cube).unwrap();
        assert_eq!(flat.len(), cube.face_count() * 9);

        // All three vertices of each face carry the identical normal.
        for face_chunk in flat.chunks(9) {
            assert_eq!(&face_chunk[0..3], &face_chunk[3..6]);
            assert_eq!(&face_chunk[3..6], &face_chunk[6..9]);
        }
    }

    #[test]
    fn test_smooth_normals_average_box_corner() {
        // Corner vertex 0 of the box sits on the front (+z), bottom (-y)
        // and left (-x) quads; each quad contributes two axis-aligned
        // face normals of magnitude 1, so the sum is (-2, -2, 2) and the
        // unit-normalized result is (-1, -1, 1) / sqrt(3).
        let cube = generate_box();
        let smooth = smooth_vertex_normals(&cube).unwrap();

        let expected = 1.0 / 3.0_f32.sqrt();
        // Face 0 is [0, 1, 2]; its first vertex slot holds vertex 0.
        assert!((smooth[0] - -expected).abs() < EPSILON);
        assert!((smooth[1] - -expected).abs() < EPSILON);
        assert!((smooth[2] - expected).abs() < EPSILON);
    }

    #[test]
    fn test_smooth_normals_length_matches_flat() {
        let cube = generate_box();
        let smooth = smooth_vertex_normals(&cube).unwrap();
        let flat = flat_vertex_normals(&cube).unwrap();
        assert_eq!(smooth.len(), flat.len());

        // Smooth normals are unit length.
        for n in smooth.chunks(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_degenerate_face_counted_once() {
        // Vertex 0 appears twice in the second face; that face's normal
        // must contribute to the sum exactly once.
        let mesh = Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2], [0, 0, 1]],
        );
        let normals = face_normals(&mesh).unwrap();
        // The degenerate face has a zero normal, so the average for
        // vertex 0 is just the first face's unit normal.
        assert_eq!(normals[1], Vector::vec3(0.0, 0.0, 0.0));

        let smooth = smooth_vertex_normals(&mesh).unwrap();
        assert!((smooth[0] - 0.0).abs() < EPSILON);
        assert!((smooth[1] - 0.0).abs() < EPSILON);
        assert!((smooth[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_mesh_fails_fast() {
        let mesh = Mesh::new(vec![[0.0; 3]], vec![[0, 0, 9]]);
        assert!(face_normals(&mesh).is_err());
        assert!(flat_vertex_normals(&mesh).is_err());
        assert!(smooth_vertex_normals(&mesh).is_err());
    }
}
