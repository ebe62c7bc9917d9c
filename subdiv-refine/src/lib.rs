//! Catmull-Clark refinement with crease handling.
//!
//! This crate builds finer mesh levels from a coarse control mesh:
//!
//! - **Splitting** ([`split_topology`]): the child topology — one
//!   face-point per parent face, one edge-point per parent edge, one
//!   quad per parent face corner — with crease sharpness carried onto
//!   the split edge halves, decayed by one per level.
//! - **Averaging** ([`average_positions`]): child positions per the
//!   Catmull-Clark face-point / edge-point / vertex-point rules, with
//!   sharp-edge and sharp-vertex pass-through for creased topology.
//! - **The level chain** ([`SubdivisionChain`]): an arena of immutable
//!   [`MeshLevel`] snapshots indexed by level number, with truncating
//!   re-refinement and a navigation cursor.
//!
//! A convenience driver, [`subdivide_mesh`], wraps the chain behind
//! validation and a face budget and reports statistics.
//!
//! # Example
//!
//! ```
//! use subdiv_refine::SubdivisionChain;
//! use subdiv_types::{CreaseSet, cube};
//!
//! // Keep one cube edge sharp for two refinement levels.
//! let creases = CreaseSet::new().with_edge(0, 1, 2.0);
//! let mut chain = SubdivisionChain::new(&cube(), &creases).unwrap();
//!
//! chain.refine().unwrap();
//! assert_eq!(chain.finest().topology().vertex_count(), 26);
//! ```

#![warn(missing_docs)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod average;
mod chain;
mod error;
mod params;
mod refine;
mod result;
mod split;

pub use average::average_positions;
pub use chain::{MeshLevel, SubdivisionChain};
pub use error::{RefineError, RefineResult};
pub use params::RefineParams;
pub use refine::subdivide_mesh;
pub use result::SubdivisionOutcome;
pub use split::{split_faces, split_topology};
