//! Shading normal estimation for polygon meshes.
//!
//! Computes per-face normals as the normalized, area-weighted sum of
//! triangle-fan cross products, and per-vertex normals as the
//! normalized sum of incident face normals.
//!
//! Degenerate geometry (zero-area faces, isolated vertices) yields the
//! zero vector rather than NaN; see [`face_normals`] for the policy.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod estimate;

pub use estimate::{DEGENERATE_EPSILON, face_normals, vertex_normals};
