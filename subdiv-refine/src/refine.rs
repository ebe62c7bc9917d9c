//! One-shot refinement driver.

use subdiv_types::{CreaseSet, PolyMesh};
use tracing::debug;

use crate::chain::SubdivisionChain;
use crate::error::{RefineError, RefineResult};
use crate::params::RefineParams;
use crate::result::SubdivisionOutcome;

/// Subdivide a mesh a fixed number of levels.
///
/// Validates the request, builds a [`SubdivisionChain`], refines it
/// `params.levels` times, and returns the chain with statistics.
///
/// # Errors
///
/// Returns an error if:
/// - `params.levels` is 0
/// - the projected face count exceeds `params.max_faces`
/// - the mesh is empty, malformed, or its crease set names a missing
///   edge (see [`SubdivisionChain::new`])
///
/// # Examples
///
/// ```
/// use subdiv_refine::{RefineParams, subdivide_mesh};
/// use subdiv_types::{CreaseSet, cube};
///
/// let params = RefineParams::new().with_levels(2);
/// let outcome = subdivide_mesh(&cube(), &CreaseSet::new(), &params).unwrap();
///
/// assert_eq!(outcome.final_faces, 96);
/// assert_eq!(outcome.final_vertices, 98);
/// ```
pub fn subdivide_mesh(
    mesh: &PolyMesh,
    creases: &CreaseSet,
    params: &RefineParams,
) -> RefineResult<SubdivisionOutcome> {
    if params.levels == 0 {
        return Err(RefineError::InvalidLevels(0));
    }

    let projected = params.expected_faces(mesh.corner_count());
    if projected > params.max_faces {
        return Err(RefineError::MeshTooLarge {
            current: mesh.face_count(),
            projected,
            max: params.max_faces,
        });
    }

    debug!(
        "subdividing mesh: {} faces, {} vertices, {} levels",
        mesh.face_count(),
        mesh.vertex_count(),
        params.levels
    );

    let mut chain = SubdivisionChain::new(mesh, creases)?;
    for _ in 0..params.levels {
        chain.refine()?;
    }

    let (final_vertices, final_faces) = {
        let finest = chain.finest().topology();
        (finest.vertex_count(), finest.face_count())
    };

    Ok(SubdivisionOutcome {
        chain,
        base_vertices: mesh.vertex_count(),
        base_faces: mesh.face_count(),
        final_vertices,
        final_faces,
        levels: params.levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use subdiv_types::cube;

    #[test]
    fn zero_levels_rejected() {
        let params = RefineParams::new().with_levels(0);
        let err = subdivide_mesh(&cube(), &CreaseSet::new(), &params).unwrap_err();
        assert_eq!(err, RefineError::InvalidLevels(0));
    }

    #[test]
    fn oversize_request_rejected() {
        let params = RefineParams::new().with_levels(5).with_max_faces(100);
        let err = subdivide_mesh(&cube(), &CreaseSet::new(), &params).unwrap_err();
        assert_eq!(
            err,
            RefineError::MeshTooLarge {
                current: 6,
                projected: 6144,
                max: 100
            }
        );
    }

    #[test]
    fn empty_mesh_rejected() {
        let err =
            subdivide_mesh(&PolyMesh::new(), &CreaseSet::new(), &RefineParams::new()).unwrap_err();
        assert_eq!(err, RefineError::EmptyMesh);
    }

    #[test]
    fn single_level_counts() {
        let outcome =
            subdivide_mesh(&cube(), &CreaseSet::new(), &RefineParams::new()).unwrap();
        assert_eq!(outcome.base_faces, 6);
        assert_eq!(outcome.base_vertices, 8);
        assert_eq!(outcome.final_faces, 24);
        assert_eq!(outcome.final_vertices, 26);
        assert_eq!(outcome.chain.level_count(), 2);
    }

    #[test]
    fn creased_run_matches_chain_refinement() {
        let creases = CreaseSet::new().with_edge(0, 1, 2.0);
        let params = RefineParams::new().with_levels(2);
        let outcome = subdivide_mesh(&cube(), &creases, &params).unwrap();

        let mut chain = SubdivisionChain::new(&cube(), &creases).unwrap();
        chain.refine().unwrap();
        chain.refine().unwrap();

        assert_eq!(outcome.chain.finest().positions(), chain.finest().positions());
    }
}
