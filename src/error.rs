use thiserror::Error;

/// Errors returned by a triangulation call.
///
/// A failed call never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulateError {
    /// The input violates the basic contract and was rejected before any work was done.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] InvalidPolygon),

    /// No ear could be found, which means the input is not a simple polygon.
    #[error("degenerate polygon: no ear found with {remaining} vertices remaining")]
    DegeneratePolygon {
        /// Number of vertices still in the ring when the search failed.
        remaining: usize,
    },
}

/// Reason an input was rejected as [`TriangulateError::InvalidPolygon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPolygon {
    #[error("expected at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// Vertex `index` has the same coordinates as the vertex following it (wrapping around).
    #[error("vertex {index} repeats the position of its successor")]
    DuplicateVertex { index: usize },

    /// The coordinates span too wide a range for exact cross products in the coordinate type.
    #[error("coordinate range too wide for exact cross products")]
    CoordinateOverflow,

    #[error("{count} vertices cannot be addressed by an index type holding at most {max}")]
    TooManyVertices { count: usize, max: usize },
}
