//! # Vector and Matrix Math
//!
//! Hand-rolled linear algebra for the kernel: a generalized N-dimensional
//! [`Vector`] and a row-major homogeneous [`Mat4`] transform.
//!
//! The conventions here are load-bearing: `Mat4` is row-major with the
//! translation in the last row, points transform as row vectors
//! (`point x matrix`), and every rotation constructor takes degrees.

pub mod mat4;
pub mod vector;

pub use mat4::Mat4;
pub use vector::Vector;
