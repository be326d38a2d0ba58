//! Graphics-facing modules: geometry, scene graph, camera, and the
//! upload boundary to an external renderer.

pub mod backend;
pub mod camera;
pub mod geometry;
pub mod scene;

pub use backend::{upload_object, GpuGeometry, GraphicsBackend};
pub use camera::Camera;
