//! Face-vertex polygon mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A face-vertex polygon mesh.
///
/// This is the input type for topology derivation and refinement. It
/// stores vertex positions and faces separately, with each face an
/// ordered list of vertex indices (winding order is significant).
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - one 3D point per vertex
/// - `faces`: `Vec<Vec<u32>>` - polygon faces as vertex index lists
///
/// A valid face has at least 3 vertices; validation happens when the
/// mesh is handed to `Topology::derive`, not here.
///
/// # Example
///
/// ```
/// use subdiv_types::{PolyMesh, Point3};
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2, 3]];
///
/// let mesh = PolyMesh::from_parts(positions, faces);
/// assert_eq!(mesh.corner_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Polygon faces as indices into the position array.
    /// Counter-clockwise winding when viewed from outside.
    pub faces: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from positions and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<Vec<u32>>) -> Self {
        Self { positions, faces }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Total number of face corners across all faces.
    ///
    /// One level of refinement emits exactly one quad per corner, so
    /// this is also the face count of the next level.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(Vec::len).sum()
    }
}

/// Create a cube control mesh spanning (-1,-1,-1) to (1,1,1).
///
/// Six quad faces with counter-clockwise winding viewed from outside.
/// This is the canonical closed test polyhedron: 8 vertices, 6 faces,
/// and 12 edges once topology is derived.
///
/// # Example
///
/// ```
/// use subdiv_types::cube;
///
/// let mesh = cube();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// assert_eq!(mesh.corner_count(), 24);
/// ```
#[must_use]
pub fn cube() -> PolyMesh {
    let positions = vec![
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
    ];

    let faces = vec![
        vec![0, 1, 2, 3], // +z
        vec![5, 4, 7, 6], // -z
        vec![1, 5, 6, 2], // +x
        vec![4, 0, 3, 7], // -x
        vec![3, 2, 6, 7], // +y
        vec![4, 5, 1, 0], // -y
    ];

    PolyMesh::from_parts(positions, faces)
}

/// Create a single square face in the z = 0 plane.
///
/// An open mesh: all four edges are boundary edges. Useful for
/// exercising the boundary averaging rules.
#[must_use]
pub fn square() -> PolyMesh {
    let positions = vec![
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
    ];

    PolyMesh::from_parts(positions, vec![vec![0, 1, 2, 3]])
}
