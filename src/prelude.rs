//! # Prism Prelude
//!
//! A convenient way to import the commonly used types: math, generators,
//! scene nodes, and the camera.
//!
//! ```
//! use prism::prelude::*;
//! ```

pub use crate::error::{Error, Result};

pub use crate::math::{Mat4, Vector};

pub use crate::gfx::geometry::{
    face_normals, flat_vertex_normals, generate_box, generate_cone, generate_icosahedron,
    generate_sphere, smooth_vertex_normals, Mesh,
};

pub use crate::gfx::scene::{
    Aabb, DrawCommand, DrawMode, Group, Material, NodeId, NormalMode, Object, Scene, SceneNode,
};

pub use crate::gfx::backend::{upload_object, GpuGeometry, GraphicsBackend};
pub use crate::gfx::camera::Camera;
