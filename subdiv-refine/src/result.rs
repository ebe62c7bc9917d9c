//! Result type for the one-shot refinement driver.

// Face counts don't overflow the f64 ratios in practice.
#![allow(clippy::cast_precision_loss)]

use subdiv_types::PolyMesh;

use crate::chain::SubdivisionChain;

/// Outcome of a [`subdivide_mesh`](crate::subdivide_mesh) run.
///
/// Carries the full level chain (for navigation or further refinement)
/// together with before/after statistics.
#[derive(Debug, Clone)]
pub struct SubdivisionOutcome {
    /// The built level chain, base through finest level.
    pub chain: SubdivisionChain,

    /// Vertex count of the base mesh.
    pub base_vertices: usize,

    /// Face count of the base mesh.
    pub base_faces: usize,

    /// Vertex count of the finest level.
    pub final_vertices: usize,

    /// Face count of the finest level.
    pub final_faces: usize,

    /// Number of refinement levels built.
    pub levels: u32,
}

impl SubdivisionOutcome {
    /// Face multiplication factor, base to finest.
    #[must_use]
    pub fn face_ratio(&self) -> f64 {
        if self.base_faces == 0 {
            1.0
        } else {
            self.final_faces as f64 / self.base_faces as f64
        }
    }

    /// Export the finest level as a plain mesh.
    #[must_use]
    pub fn final_mesh(&self) -> PolyMesh {
        self.chain.finest().to_poly_mesh()
    }
}

impl std::fmt::Display for SubdivisionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Refined {} levels: {} → {} faces ({:.1}x), {} → {} vertices",
            self.levels,
            self.base_faces,
            self.final_faces,
            self.face_ratio(),
            self.base_vertices,
            self.final_vertices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RefineParams;
    use crate::refine::subdivide_mesh;
    use subdiv_types::{CreaseSet, cube};

    fn cube_outcome(levels: u32) -> SubdivisionOutcome {
        let params = RefineParams::new().with_levels(levels);
        subdivide_mesh(&cube(), &CreaseSet::new(), &params).unwrap()
    }

    #[test]
    fn face_ratio() {
        let outcome = cube_outcome(1);
        assert!((outcome.face_ratio() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn final_mesh_matches_counts() {
        let outcome = cube_outcome(2);
        let mesh = outcome.final_mesh();
        assert_eq!(mesh.vertex_count(), outcome.final_vertices);
        assert_eq!(mesh.face_count(), outcome.final_faces);
    }

    #[test]
    fn display() {
        let outcome = cube_outcome(1);
        let display = format!("{outcome}");
        assert!(display.contains("6"));
        assert!(display.contains("24"));
        assert!(display.contains("4.0x"));
    }
}
