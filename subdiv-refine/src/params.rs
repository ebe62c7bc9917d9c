//! Refinement parameters.

/// Parameters for the one-shot [`subdivide_mesh`](crate::subdivide_mesh)
/// driver.
#[derive(Debug, Clone)]
pub struct RefineParams {
    /// Number of refinement levels to build.
    pub levels: u32,

    /// Maximum faces allowed in the finest level (prevents runaway
    /// memory use on deep refinements).
    pub max_faces: usize,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self {
            levels: 1,
            max_faces: 10_000_000,
        }
    }
}

impl RefineParams {
    /// Create parameters with default values (one level).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of refinement levels.
    #[must_use]
    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Set the maximum allowed face count.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Projected face count of the finest level.
    ///
    /// The first level emits one quad per corner of the base mesh, and
    /// every further level multiplies the (now all-quad) face count
    /// by 4. `corner_count` is
    /// [`PolyMesh::corner_count`](subdiv_types::PolyMesh::corner_count).
    /// Meaningless for `levels == 0`, which the driver rejects anyway.
    #[must_use]
    pub const fn expected_faces(&self, corner_count: usize) -> usize {
        let mut faces = corner_count;
        let mut level = 1;
        while level < self.levels {
            faces *= 4;
            level += 1;
        }
        faces
    }
}
