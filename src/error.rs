//! Error types for the geometry kernel.
//!
//! Every variant is a programming-contract violation at the call site,
//! surfaced to the caller rather than recovered internally. None of the
//! kernel's operations depend on external resources, so there are no
//! retryable conditions.

use thiserror::Error;

/// Main error type for the kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Binary vector operation on operands of different dimensions.
    #[error("vectors have different dimensions ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// Operation restricted to a specific dimension (cross product is 3D only).
    #[error("operation requires {expected}-dimensional vectors, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// A face references a vertex index past the end of the vertex list.
    #[error("face references vertex index {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
}

/// Result type alias using the kernel's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
