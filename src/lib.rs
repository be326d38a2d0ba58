//! # Prism
//!
//! A minimal scene-description and geometry kernel. Prism turns abstract
//! mesh descriptions (vertex lists, triangulated faces) into
//! renderer-ready data: flattened position arrays, per-vertex colors and
//! normals, and composed object-space-to-world-space transforms.
//!
//! The kernel is deliberately renderer-agnostic: it performs no graphics
//! calls, spawns no threads, and does no I/O. An external render driver
//! owns the frame loop, walks the [`Scene`](gfx::scene::Scene) once per
//! frame, and feeds the resulting draw commands to whatever graphics API
//! it likes through the [`GraphicsBackend`](gfx::backend::GraphicsBackend)
//! boundary.
//!
//! ## Example
//!
//! ```
//! use prism::prelude::*;
//!
//! # fn main() -> prism::Result<()> {
//! let mut scene = Scene::new();
//! scene.add(
//!     Object::new(generate_box(), Material::Uniform([0.8, 0.2, 0.2]))?
//!         .with_position([0.0, 1.0, 0.0]),
//! );
//!
//! let mut camera = Camera::new();
//! camera.set_position([0.0, 2.0, 5.0]);
//! camera.look_at([0.0, 1.0, 0.0]);
//!
//! for command in scene.draw_commands() {
//!     // hand command.vertices / normals / colors to the renderer,
//!     // combined with camera.matrix() and a projection
//!     let _ = command.is_lit();
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gfx;
pub mod math;
pub mod prelude;

pub use error::{Error, Result};
