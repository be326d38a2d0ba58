//! # Primitive Shape Generation
//!
//! Pure functions producing index-based [`Mesh`] values for common solids.
//! Each generator is a function of its shape parameters only; material,
//! placement, and topology mode are layered on by the scene module.
//!
//! All generators wind their faces consistently outward and never emit a
//! face index at or past their own vertex count.

use super::Mesh;
use std::f32::consts::PI;

/// Generates a unit cube centered at the origin.
///
/// 8 corner vertices with half-extent 0.5 on each axis, and 12 triangular
/// faces forming the 6 quads, split 2 triangles per quad.
pub fn generate_box() -> Mesh {
    let h = 0.5;

    let vertices = vec![
        [-h, -h, h],
        [h, -h, h],
        [h, h, h],
        [-h, h, h],
        [-h, -h, -h],
        [h, -h, -h],
        [h, h, -h],
        [-h, h, -h],
    ];

    // Two triangles per quad: front, back, top, bottom, right, left.
    let faces = vec![
        [0, 1, 2],
        [0, 2, 3],
        [4, 6, 5],
        [4, 7, 6],
        [3, 2, 6],
        [3, 6, 7],
        [0, 5, 1],
        [0, 4, 5],
        [1, 5, 6],
        [1, 6, 2],
        [0, 3, 7],
        [0, 7, 4],
    ];

    Mesh::new(vertices, faces)
}

/// Generates a unit sphere from a latitude/longitude grid.
///
/// `resolution` controls both axes of the grid: `(resolution + 1)^2`
/// vertices sampled from spherical coordinates, and `2 * resolution^2`
/// triangles (two per grid cell).
pub fn generate_sphere(resolution: u32) -> Mesh {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for lat in 0..=resolution {
        let theta = lat as f32 * PI / resolution as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=resolution {
            let phi = long as f32 * 2.0 * PI / resolution as f32;

            let x = phi.cos() * sin_theta;
            let y = cos_theta;
            let z = phi.sin() * sin_theta;
            vertices.push([x, y, z]);
        }
    }

    for lat in 0..resolution {
        for long in 0..resolution {
            let first = lat * (resolution + 1) + long;
            let second = first + resolution + 1;
            faces.push([first, first + 1, second]);
            faces.push([second, first + 1, second + 1]);
        }
    }

    Mesh::new(vertices, faces)
}

/// Generates a regular icosahedron with unit circumradius.
///
/// The canonical construction: 12 vertices on three mutually orthogonal
/// golden-ratio rectangles, 20 fixed triangular faces.
pub fn generate_icosahedron() -> Mesh {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let x = 1.0 / (1.0 + phi * phi).sqrt();
    let z = phi / (1.0 + phi * phi).sqrt();

    let vertices = vec![
        [-x, 0.0, z],
        [x, 0.0, z],
        [-x, 0.0, -z],
        [x, 0.0, -z],
        [0.0, z, x],
        [0.0, z, -x],
        [0.0, -z, x],
        [0.0, -z, -x],
        [z, x, 0.0],
        [-z, x, 0.0],
        [z, -x, 0.0],
        [-z, -x, 0.0],
    ];

    let faces = vec![
        [1, 4, 0],
        [4, 9, 0],
        [4, 5, 9],
        [8, 5, 4],
        [1, 8, 4],
        [1, 10, 8],
        [10, 3, 8],
        [8, 3, 5],
        [3, 2, 5],
        [3, 7, 2],
        [3, 10, 7],
        [10, 6, 7],
        [6, 11, 7],
        [6, 0, 11],
        [6, 1, 0],
        [10, 1, 6],
        [11, 0, 9],
        [2, 11, 9],
        [5, 2, 9],
        [11, 2, 7],
    ];

    Mesh::new(vertices, faces)
}

/// Generates a cone with its apex on the +Y axis and its base on y = 0.
///
/// Layout: apex vertex, base-center vertex, then `resolution` rim
/// vertices evenly spaced by angle. Side faces fan from the apex around
/// the rim (wrapping the last rim vertex back to the first); base faces
/// fan from the base center with the opposite winding.
pub fn generate_cone(resolution: u32, height: f32, radius: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(resolution as usize + 2);
    let mut faces = Vec::with_capacity(resolution as usize * 2);

    vertices.push([0.0, height, 0.0]);
    vertices.push([0.0, 0.0, 0.0]);

    for i in 0..resolution {
        let angle = (i as f32 / resolution as f32) * 2.0 * PI;
        vertices.push([radius * angle.cos(), 0.0, radius * angle.sin()]);
    }

    // Rim vertices start at index 2.
    for i in 2..vertices.len() as u32 {
        let next = (i + 1 - 2) % resolution + 2;
        faces.push([0, next, i]);
    }
    for i in 2..vertices.len() as u32 {
        let next = (i + 1 - 2) % resolution + 2;
        faces.push([1, i, next]);
    }

    Mesh::new(vertices, faces)
}
