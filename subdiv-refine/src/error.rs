//! Error types for refinement operations.

use subdiv_topology::TopologyError;
use thiserror::Error;

/// Errors that can occur while building or refining a level chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefineError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Topology derivation rejected the face list.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// The position array is shorter than the derived vertex table.
    #[error("Topology names {vertices} vertices but only {positions} positions were supplied")]
    PositionCountMismatch {
        /// Vertex count of the derived topology.
        vertices: usize,
        /// Length of the supplied position array.
        positions: usize,
    },

    /// A crease assignment names an edge the base mesh does not have.
    #[error("Crease edge ({v0}, {v1}) does not exist in the base mesh")]
    CreaseEdgeMissing {
        /// First vertex of the missing edge.
        v0: u32,
        /// Second vertex of the missing edge.
        v1: u32,
    },

    /// Invalid refinement level count.
    #[error("Invalid level count: {0} (must be >= 1)")]
    InvalidLevels(u32),

    /// Refinement would exceed the configured face budget.
    #[error("Refinement would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after refinement.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },

    /// A chain operation addressed a level that does not exist.
    #[error("Level {level} out of range (chain has {levels} levels)")]
    LevelOutOfRange {
        /// Requested level index.
        level: usize,
        /// Number of levels in the chain.
        levels: usize,
    },
}

/// Result type for refinement operations.
pub type RefineResult<T> = std::result::Result<T, RefineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RefineError::EmptyMesh;
        assert_eq!(format!("{err}"), "Mesh has no vertices");

        let err = RefineError::MeshTooLarge {
            current: 24,
            projected: 6144,
            max: 100,
        };
        let display = format!("{err}");
        assert!(display.contains("24"));
        assert!(display.contains("6144"));
        assert!(display.contains("100"));
    }

    #[test]
    fn topology_error_is_transparent() {
        let err = RefineError::from(TopologyError::NoFaces);
        assert_eq!(format!("{err}"), "Mesh has no faces");
    }
}
