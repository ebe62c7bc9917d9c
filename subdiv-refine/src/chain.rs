//! Refinement level chain.

use nalgebra::{Point3, Vector3};
use subdiv_topology::Topology;
use subdiv_types::{CreaseSet, PolyMesh};
use tracing::debug;

use crate::average::average_positions;
use crate::error::{RefineError, RefineResult};
use crate::split::split_topology;

/// One refinement level: topology, positions, and shading normals.
///
/// Levels are immutable snapshots. A level is only ever discarded by
/// truncating the chain it lives in; it is never edited in place.
#[derive(Debug, Clone)]
pub struct MeshLevel {
    topology: Topology,
    positions: Vec<Point3<f64>>,
    face_normals: Vec<Vector3<f64>>,
    vertex_normals: Vec<Vector3<f64>>,
}

impl MeshLevel {
    fn new(topology: Topology, positions: Vec<Point3<f64>>) -> Self {
        let face_normals = subdiv_normals::face_normals(&topology, &positions);
        let vertex_normals = subdiv_normals::vertex_normals(&topology, &face_normals);
        Self {
            topology,
            positions,
            face_normals,
            vertex_normals,
        }
    }

    /// The level's adjacency structure.
    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// One position per vertex.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// One normal per face.
    #[inline]
    #[must_use]
    pub fn face_normals(&self) -> &[Vector3<f64>] {
        &self.face_normals
    }

    /// One normal per vertex.
    #[inline]
    #[must_use]
    pub fn vertex_normals(&self) -> &[Vector3<f64>] {
        &self.vertex_normals
    }

    /// Export positions and face lists for rendering or re-import.
    #[must_use]
    pub fn to_poly_mesh(&self) -> PolyMesh {
        let faces = self
            .topology
            .faces
            .iter()
            .map(|face| face.verts.clone())
            .collect();
        PolyMesh::from_parts(self.positions.clone(), faces)
    }
}

/// An ordered chain of refinement levels with a navigation cursor.
///
/// Level 0 is the base control mesh; level `k + 1` is always the
/// refinement of level `k`. Levels are stored in a vector indexed by
/// level number, so "destroy the old child and everything below it" is
/// a truncation, and parent/child navigation is index arithmetic
/// rather than pointer chasing.
///
/// The cursor (`current_level`) is the caller-owned piece of UI state
/// for walking up and down the chain; it never influences refinement
/// results.
///
/// # Example
///
/// ```
/// use subdiv_refine::SubdivisionChain;
/// use subdiv_types::{CreaseSet, cube};
///
/// let mut chain = SubdivisionChain::new(&cube(), &CreaseSet::new()).unwrap();
/// let level1 = chain.refine().unwrap();
///
/// assert_eq!(level1.topology().vertex_count(), 26);
/// assert_eq!(level1.topology().face_count(), 24);
/// assert_eq!(chain.level_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SubdivisionChain {
    levels: Vec<MeshLevel>,
    current: usize,
}

impl SubdivisionChain {
    /// Build the base level from a control mesh and crease assignments.
    ///
    /// Derives the base topology, checks the position array covers the
    /// vertex table, applies the crease set, and estimates normals.
    ///
    /// # Errors
    ///
    /// - [`RefineError::EmptyMesh`] if the mesh has no vertices
    /// - [`RefineError::Topology`] if derivation rejects the face list
    /// - [`RefineError::PositionCountMismatch`] if faces name more
    ///   vertices than positions were supplied
    /// - [`RefineError::CreaseEdgeMissing`] if a crease assignment
    ///   names an edge the mesh does not have
    pub fn new(mesh: &PolyMesh, creases: &CreaseSet) -> RefineResult<Self> {
        if mesh.positions.is_empty() {
            return Err(RefineError::EmptyMesh);
        }

        let mut topology = Topology::derive(&mesh.faces)?;
        if topology.vertex_count() > mesh.positions.len() {
            return Err(RefineError::PositionCountMismatch {
                vertices: topology.vertex_count(),
                positions: mesh.positions.len(),
            });
        }

        for ((v0, v1), sharpness) in creases.iter() {
            if !topology.set_crease(v0, v1, sharpness) {
                return Err(RefineError::CreaseEdgeMissing { v0, v1 });
            }
        }

        let base = MeshLevel::new(topology, mesh.positions.clone());
        Ok(Self {
            levels: vec![base],
            current: 0,
        })
    }

    /// Refine the finest level, appending one new level to the chain.
    ///
    /// # Errors
    ///
    /// Propagates topology errors from the child derivation.
    pub fn refine(&mut self) -> RefineResult<&MeshLevel> {
        self.refine_at(self.levels.len() - 1)
    }

    /// Rebuild the child of `level`, discarding all finer levels first.
    ///
    /// This is the "re-refine from here" operation: any existing levels
    /// finer than `level` are destroyed, then exactly one child is
    /// built. The cursor is clamped to stay on a surviving level.
    ///
    /// # Errors
    ///
    /// - [`RefineError::LevelOutOfRange`] if `level` does not exist
    /// - topology errors from the child derivation
    pub fn refine_at(&mut self, level: usize) -> RefineResult<&MeshLevel> {
        if level >= self.levels.len() {
            return Err(RefineError::LevelOutOfRange {
                level,
                levels: self.levels.len(),
            });
        }

        self.levels.truncate(level + 1);
        self.current = self.current.min(level);

        let parent = &self.levels[level];
        let child_topology = split_topology(parent.topology())?;
        let child_positions =
            average_positions(parent.topology(), parent.positions(), &child_topology);

        debug!(
            "refined level {}: {} -> {} vertices, {} -> {} faces",
            level,
            parent.topology().vertex_count(),
            child_topology.vertex_count(),
            parent.topology().face_count(),
            child_topology.face_count()
        );

        self.levels.push(MeshLevel::new(child_topology, child_positions));
        Ok(&self.levels[level + 1])
    }

    /// Number of levels in the chain (always at least 1).
    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get a level by index.
    #[inline]
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&MeshLevel> {
        self.levels.get(level)
    }

    /// The base (level 0) control mesh.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &MeshLevel {
        &self.levels[0]
    }

    /// The finest level currently in the chain.
    #[inline]
    #[must_use]
    pub fn finest(&self) -> &MeshLevel {
        &self.levels[self.levels.len() - 1]
    }

    /// The level the cursor is on.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &MeshLevel {
        &self.levels[self.current]
    }

    /// Index of the level the cursor is on.
    #[inline]
    #[must_use]
    pub const fn current_level(&self) -> usize {
        self.current
    }

    /// Move the cursor one level finer, refining on demand if the
    /// cursor is already on the finest level.
    ///
    /// # Errors
    ///
    /// Propagates topology errors from an on-demand refinement.
    pub fn step_finer(&mut self) -> RefineResult<&MeshLevel> {
        if self.current + 1 == self.levels.len() {
            self.refine()?;
        }
        self.current += 1;
        Ok(&self.levels[self.current])
    }

    /// Move the cursor one level coarser, saturating at the base.
    pub fn step_coarser(&mut self) -> &MeshLevel {
        self.current = self.current.saturating_sub(1);
        &self.levels[self.current]
    }
}
