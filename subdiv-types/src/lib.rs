//! Core mesh types for the subdiv workspace.
//!
//! This crate provides the foundational types for subdivision-surface
//! processing:
//!
//! - [`PolyMesh`] - A face-vertex polygon mesh (faces of any arity >= 3)
//! - [`CreaseSet`] - Per-edge sharpness assignments for a base mesh
//! - [`cube`] / [`square`] - Canonical control meshes for tests and demos
//!
//! Unlike a triangle mesh, a `PolyMesh` face is an ordered list of vertex
//! indices of arbitrary length. Catmull-Clark refinement turns any such
//! mesh into an all-quad mesh after one level, so the polygon
//! representation is only ever "mixed" at level 0.
//!
//! # Coordinate System
//!
//! Right-handed, `f64` throughout. Face winding is **counter-clockwise
//! when viewed from outside**; normals point outward by the right-hand
//! rule.
//!
//! # Example
//!
//! ```
//! use subdiv_types::{PolyMesh, Point3};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push(vec![0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod crease;
mod mesh;

pub use crease::CreaseSet;
pub use mesh::{PolyMesh, cube, square};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
