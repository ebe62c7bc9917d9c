//! Half-edge-like topology derivation for subdivision surfaces.
//!
//! This crate turns a plain face-vertex list into the full adjacency
//! structure refinement needs:
//!
//! - vertex -> incident edges and faces
//! - edge -> adjacent faces, split by winding direction
//! - face -> parallel vertex and edge cycles
//!
//! Derivation is a one-shot construction step: malformed input (empty
//! face list, degenerate faces, non-manifold edges) is rejected with a
//! [`TopologyError`] and there is no partial result.
//!
//! # Example
//!
//! ```
//! use subdiv_topology::Topology;
//!
//! let faces = vec![vec![0, 1, 2], vec![2, 1, 3]];
//! let topo = Topology::derive(&faces).unwrap();
//!
//! assert_eq!(topo.edge_count(), 5);
//! assert_eq!(topo.boundary_edge_count(), 4);
//! ```

#![warn(missing_docs)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod edge;
mod error;
mod topology;

pub use edge::Edge;
pub use error::{TopologyError, TopologyResult};
pub use topology::{FaceTopology, Topology, VertexTopology};
