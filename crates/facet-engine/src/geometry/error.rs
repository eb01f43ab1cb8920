use std::fmt;

/// A mesh that violates the index-list invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Triangle index count is not a multiple of 3.
    IndexCountNotTriangles { count: usize },
    /// An index refers past the end of the vertex table.
    IndexOutOfRange { index: u16, vertex_count: usize },
    /// A triangle names the same vertex more than once.
    DegenerateTriangle { triangle: usize },
    /// A polygon face has fewer than 3 vertices.
    DegenerateFace { face: usize, len: usize },
    /// Edge index count is odd.
    UnpairedEdgeIndex { count: usize },
    /// Vertex count does not fit a `u16` index.
    TooManyVertices { count: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IndexCountNotTriangles { count } => {
                write!(f, "index count {count} is not a multiple of 3")
            }
            GeometryError::IndexOutOfRange { index, vertex_count } => {
                write!(f, "index {index} out of range for {vertex_count} vertices")
            }
            GeometryError::DegenerateTriangle { triangle } => {
                write!(f, "triangle {triangle} repeats a vertex")
            }
            GeometryError::DegenerateFace { face, len } => {
                write!(f, "face {face} has only {len} vertices")
            }
            GeometryError::UnpairedEdgeIndex { count } => {
                write!(f, "edge index count {count} is odd")
            }
            GeometryError::TooManyVertices { count } => {
                write!(f, "{count} vertices exceed the u16 index range")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
