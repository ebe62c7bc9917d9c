//! Error types for topology derivation.

use thiserror::Error;

/// Errors that can occur while deriving mesh topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// The face list is empty.
    #[error("Mesh has no faces")]
    NoFaces,

    /// A face has fewer than 3 vertices.
    #[error("Face {face} has {count} vertices (minimum 3)")]
    FaceTooSmall {
        /// Index of the offending face.
        face: usize,
        /// Number of vertices the face actually has.
        count: usize,
    },

    /// An edge is referenced by more than one face in the same winding
    /// direction. This covers both genuinely non-manifold meshes (three
    /// or more faces on one edge) and faces that revisit an edge.
    #[error("Edge ({v0}, {v1}) is referenced by multiple faces in the same direction")]
    NonManifoldEdge {
        /// Smaller vertex index of the canonical edge.
        v0: u32,
        /// Larger vertex index of the canonical edge.
        v1: u32,
    },
}

/// Result type for topology operations.
pub type TopologyResult<T> = std::result::Result<T, TopologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TopologyError::NoFaces;
        assert_eq!(format!("{err}"), "Mesh has no faces");

        let err = TopologyError::FaceTooSmall { face: 2, count: 1 };
        let display = format!("{err}");
        assert!(display.contains('2'));
        assert!(display.contains('1'));

        let err = TopologyError::NonManifoldEdge { v0: 3, v1: 9 };
        let display = format!("{err}");
        assert!(display.contains('3'));
        assert!(display.contains('9'));
    }
}
