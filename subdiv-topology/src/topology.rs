//! Adjacency derivation from face-vertex lists.

// Mesh index spaces are u32 by construction; casts never truncate.
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use tracing::debug;

use crate::edge::Edge;
use crate::error::{TopologyError, TopologyResult};

/// Per-vertex adjacency, populated by [`Topology::derive`].
///
/// Callers never fill these lists themselves; a vertex is identified
/// purely by its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexTopology {
    /// Indices of edges incident to this vertex.
    pub edges: Vec<u32>,
    /// Indices of faces incident to this vertex.
    pub faces: Vec<u32>,
}

impl VertexTopology {
    /// Number of incident edges.
    #[inline]
    #[must_use]
    pub fn valence(&self) -> usize {
        self.edges.len()
    }
}

/// A face with its vertex cycle and the parallel edge cycle.
///
/// `edges[j]` is the edge connecting `verts[j]` to `verts[(j + 1) % n]`.
/// Both lists always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceTopology {
    /// Ordered vertex indices (winding order significant).
    pub verts: Vec<u32>,
    /// Edge indices parallel to the vertex cycle.
    pub edges: Vec<u32>,
}

/// Complete adjacency structure for one mesh level.
///
/// Holds all vertices, faces, and edges plus a lookup map from the
/// canonical `(v0, v1)` vertex pair to the edge index. Built once per
/// level by [`derive`](Self::derive) and treated as immutable
/// afterwards (crease assignment excepted, which happens before a level
/// is published).
///
/// # Example
///
/// ```
/// use subdiv_topology::Topology;
///
/// // Two triangles sharing the edge (1, 2).
/// let faces = vec![vec![0, 1, 2], vec![2, 1, 3]];
/// let topo = Topology::derive(&faces).unwrap();
///
/// assert_eq!(topo.vertex_count(), 4);
/// assert_eq!(topo.edge_count(), 5);
/// let shared = topo.edge_between(1, 2).unwrap();
/// assert!(topo.edges[shared as usize].is_interior());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    /// Per-vertex adjacency, indexed by vertex index.
    pub verts: Vec<VertexTopology>,
    /// Faces with vertex and edge cycles.
    pub faces: Vec<FaceTopology>,
    /// Undirected edges with winding-aware face slots.
    pub edges: Vec<Edge>,
    /// Canonical vertex pair -> edge index.
    edge_lookup: HashMap<(u32, u32), u32>,
}

impl Topology {
    /// Derive the full adjacency structure from a face-vertex list.
    ///
    /// Walks each face's vertex cycle, inserting or completing one edge
    /// per consecutive vertex pair. The traversal direction relative to
    /// the canonical (sorted) pair decides which face slot the face
    /// claims. Afterwards the face->vertex and edge->vertex relations
    /// are inverted to fill each vertex's incidence lists. The vertex
    /// table is sized from the largest vertex index any face names.
    ///
    /// # Errors
    ///
    /// - [`TopologyError::NoFaces`] if `face_lists` is empty
    /// - [`TopologyError::FaceTooSmall`] for a face with < 3 vertices
    /// - [`TopologyError::NonManifoldEdge`] if an edge is walked twice
    ///   in the same direction (three faces on an edge, inconsistent
    ///   winding, or a face revisiting an edge)
    pub fn derive(face_lists: &[Vec<u32>]) -> TopologyResult<Self> {
        if face_lists.is_empty() {
            return Err(TopologyError::NoFaces);
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut edge_lookup: HashMap<(u32, u32), u32> = HashMap::new();
        let mut faces: Vec<FaceTopology> = Vec::with_capacity(face_lists.len());
        let mut max_vertex = 0u32;

        for (fi, vert_cycle) in face_lists.iter().enumerate() {
            let n = vert_cycle.len();
            if n < 3 {
                return Err(TopologyError::FaceTooSmall { face: fi, count: n });
            }

            let mut face = FaceTopology {
                verts: vert_cycle.clone(),
                edges: Vec::with_capacity(n),
            };

            for j in 0..n {
                let j0 = vert_cycle[j];
                let j1 = vert_cycle[(j + 1) % n];
                let key = normalize_edge(j0, j1);

                let eidx = if let Some(&idx) = edge_lookup.get(&key) {
                    edges[idx as usize].add_face(j0, j1, fi as u32)?;
                    idx
                } else {
                    let idx = edges.len() as u32;
                    edges.push(Edge::new(j0, j1, fi as u32));
                    edge_lookup.insert(key, idx);
                    idx
                };

                face.edges.push(eidx);
                max_vertex = max_vertex.max(j0);
            }

            faces.push(face);
        }

        let mut verts = vec![VertexTopology::default(); max_vertex as usize + 1];
        for (fi, face) in faces.iter().enumerate() {
            for &v in &face.verts {
                verts[v as usize].faces.push(fi as u32);
            }
        }
        for (ei, edge) in edges.iter().enumerate() {
            verts[edge.v0 as usize].edges.push(ei as u32);
            verts[edge.v1 as usize].edges.push(ei as u32);
        }

        debug!(
            "derived topology: {} vertices, {} edges, {} faces",
            verts.len(),
            edges.len(),
            faces.len()
        );

        Ok(Self {
            verts,
            faces,
            edges,
            edge_lookup,
        })
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of undirected edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up the edge connecting two vertices.
    ///
    /// Direction-insensitive; returns `None` if no such edge exists.
    #[must_use]
    pub fn edge_between(&self, v0: u32, v1: u32) -> Option<u32> {
        self.edge_lookup.get(&normalize_edge(v0, v1)).copied()
    }

    /// Assign a crease sharpness to the edge between two vertices.
    ///
    /// Returns `false` if no such edge exists. Negative sharpness is
    /// clamped to 0.
    pub fn set_crease(&mut self, v0: u32, v1: u32, sharpness: f64) -> bool {
        match self.edge_between(v0, v1) {
            Some(ei) => {
                self.edges[ei as usize].crease = sharpness.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Check if every edge has two adjacent faces (closed polyhedron).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.edges.iter().all(Edge::is_interior)
    }

    /// Count the edges with only one adjacent face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }

    /// Iterate over the currently sharp edges.
    pub fn creased_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_creased())
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
