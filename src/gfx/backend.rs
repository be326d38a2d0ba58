//! The boundary to the external graphics backend.
//!
//! The kernel itself never talks to a graphics API; everything it
//! produces is plain float data. A renderer plugs in by implementing
//! [`GraphicsBackend`], and [`upload_object`] materializes one object's
//! raw buffers through it. The trait is consumed only at this boundary,
//! never inside the kernel's pure functions.

use super::scene::{DrawMode, Object};

/// Buffer-upload capability provided by the surrounding renderer.
pub trait GraphicsBackend {
    /// Handle to an uploaded GPU buffer.
    type Buffer;

    /// Materializes a raw float array for GPU consumption.
    fn upload_buffer(&mut self, data: &[f32]) -> Self::Buffer;
}

/// An object's three uploaded buffers plus its topology.
#[derive(Debug)]
pub struct GpuGeometry<B> {
    pub vertices: B,
    pub normals: B,
    pub colors: B,
    pub mode: DrawMode,
}

/// Uploads an object's derived vertex, normal, and color buffers.
///
/// Buffers hold object-local geometry, so this only needs to be repeated
/// after a topology, material, or normal-mode switch; transform changes
/// never invalidate uploaded geometry.
pub fn upload_object<G: GraphicsBackend>(backend: &mut G, object: &Object) -> GpuGeometry<G::Buffer> {
    log::trace!(
        "uploading object {:?}: {} floats, {:?}",
        object.id(),
        object.raw_vertices().len(),
        object.draw_mode()
    );
    GpuGeometry {
        vertices: backend.upload_buffer(object.raw_vertices()),
        normals: backend.upload_buffer(object.raw_normals()),
        colors: backend.upload_buffer(object.raw_colors()),
        mode: object.draw_mode(),
    }
}
