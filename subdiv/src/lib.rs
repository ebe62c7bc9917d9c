//! Subdivision-surface toolkit.
//!
//! This umbrella crate re-exports the subdiv-* crates, providing a
//! unified API for building and refining subdivision surfaces from
//! face-vertex control meshes.
//!
//! # Quick Start
//!
//! ```
//! use subdiv::prelude::*;
//!
//! // A cube with one sharp edge that smooths out after two levels.
//! let creases = CreaseSet::new().with_edge(0, 1, 2.0);
//! let params = RefineParams::new().with_levels(2);
//! let outcome = subdivide_mesh(&cube(), &creases, &params).unwrap();
//!
//! assert_eq!(outcome.final_faces, 96);
//! let limit = outcome.final_mesh();
//! assert_eq!(limit.face_count(), 96);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Control mesh input: `PolyMesh`, `CreaseSet`, canonical
//!   primitives
//! - [`topology`] - Adjacency derivation: `Topology`, `Edge`, errors
//! - [`refine`] - Splitting, averaging, the level chain, the one-shot
//!   driver
//! - [`normals`] - Face and vertex normal estimation

pub use subdiv_normals as normals;
pub use subdiv_refine as refine;
pub use subdiv_topology as topology;
pub use subdiv_types as types;

/// Commonly used items.
pub mod prelude {
    pub use crate::normals::{face_normals, vertex_normals};
    pub use crate::refine::{
        MeshLevel, RefineError, RefineParams, SubdivisionChain, SubdivisionOutcome,
        subdivide_mesh,
    };
    pub use crate::topology::{Topology, TopologyError};
    pub use crate::types::{CreaseSet, Point3, PolyMesh, Vector3, cube, square};
}
