//! Refinement splitting: child topology from a parent topology.

// Mesh index spaces are u32 by construction; casts never truncate.
#![allow(clippy::cast_possible_truncation)]

use subdiv_topology::{Topology, TopologyResult};

/// Emit the child face lists for one refinement level.
///
/// Child vertices are numbered implicitly: `[0, V)` are copies of the
/// parent vertices, `[V, V + F)` one face-point per parent face, and
/// `[V + F, V + F + E)` one edge-point per parent edge. No positions
/// are assigned here; this is topology only.
///
/// A quad parent face emits four child quads in the fixed corner
/// ordering (corner, edge-after, face-point, edge-before). Any other
/// n-gon emits n child quads in a fan (corner, edge-in, face-point,
/// edge-out), matching each corner with the edges leading into and out
/// of it.
#[must_use]
pub fn split_faces(parent: &Topology) -> Vec<Vec<u32>> {
    let v = parent.vertex_count() as u32;
    let f = parent.face_count() as u32;

    let corner_total: usize = parent.faces.iter().map(|face| face.verts.len()).sum();
    let mut child_faces = Vec::with_capacity(corner_total);

    for (fi, face) in parent.faces.iter().enumerate() {
        let face_point = v + fi as u32;
        let n = face.verts.len();

        if n == 4 {
            for j in 0..4 {
                let corner = face.verts[j];
                let edge_after = v + f + face.edges[j];
                let edge_before = v + f + face.edges[(j + 3) % 4];
                child_faces.push(vec![corner, edge_after, face_point, edge_before]);
            }
        } else {
            for j in 0..n {
                let corner = face.verts[j];
                let edge_in = v + f + face.edges[(j + n - 1) % n];
                let edge_out = v + f + face.edges[j];
                child_faces.push(vec![corner, edge_in, face_point, edge_out]);
            }
        }
    }

    child_faces
}

/// Produce the child topology for one refinement level.
///
/// Emits the child face lists, derives their adjacency, and propagates
/// crease sharpness: both child edges produced by splitting a parent
/// edge at its edge-point inherit `max(0, parent_crease - 1)`.
///
/// # Errors
///
/// Propagates [`TopologyError`](subdiv_topology::TopologyError) from
/// the child derivation. On a mesh where a quad shares an edge with a
/// non-quad face, the two corner orderings above meet with the same
/// winding and derivation reports a non-manifold edge; such mixed
/// meshes are rejected rather than silently mis-linked.
pub fn split_topology(parent: &Topology) -> TopologyResult<Topology> {
    let mut child = Topology::derive(&split_faces(parent))?;
    propagate_creases(parent, &mut child);
    Ok(child)
}

/// Carry parent crease sharpness onto the two child halves of each
/// split edge, decayed by one level.
///
/// A parent edge's edge-point index pairs with each original endpoint
/// (both below the `V` threshold), which is how the child edges are
/// matched back to the parent edge.
fn propagate_creases(parent: &Topology, child: &mut Topology) {
    let v = parent.vertex_count() as u32;
    let f = parent.face_count() as u32;

    for (ei, edge) in parent.edges.iter().enumerate() {
        if !edge.is_creased() {
            continue;
        }
        let decayed = (edge.crease - 1.0).max(0.0);
        let edge_point = v + f + ei as u32;
        for endpoint in [edge.v0, edge.v1] {
            child.set_crease(endpoint, edge_point, decayed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subdiv_types::cube;

    fn cube_topology() -> Topology {
        Topology::derive(&cube().faces).unwrap()
    }

    #[test]
    fn quad_face_splits_into_four_quads() {
        let parent = cube_topology();
        let child_faces = split_faces(&parent);

        assert_eq!(child_faces.len(), 24);
        assert!(child_faces.iter().all(|face| face.len() == 4));
    }

    #[test]
    fn quad_corner_ordering() {
        let parent = cube_topology();
        let child_faces = split_faces(&parent);

        // Parent face 0 is [0, 1, 2, 3] with edges 0..4; face-points
        // start at 8 and edge-points at 14. The first child quad is
        // (corner 0, edge-after 14, face-point 8, edge-before 17).
        assert_eq!(child_faces[0], vec![0, 14, 8, 17]);
    }

    #[test]
    fn child_counts_match_parent_sums() {
        let parent = cube_topology();
        let child = split_topology(&parent).unwrap();

        let expected_verts =
            parent.vertex_count() + parent.face_count() + parent.edge_count();
        assert_eq!(child.vertex_count(), expected_verts);
        assert_eq!(child.face_count(), 24);
        assert_eq!(child.edge_count(), 48);
        assert!(child.is_closed());
    }

    #[test]
    fn triangle_splits_into_fan_of_three() {
        let parent = Topology::derive(&[vec![0, 1, 2]]).unwrap();
        let child_faces = split_faces(&parent);

        assert_eq!(child_faces.len(), 3);
        assert!(child_faces.iter().all(|face| face.len() == 4));

        // V = 3, F = 1, E = 3: face-point is 3, edge-points 4..7.
        // Corner 0 sits between edge 2 (in) and edge 0 (out).
        assert_eq!(child_faces[0], vec![0, 6, 3, 4]);

        let child = Topology::derive(&child_faces).unwrap();
        assert_eq!(child.vertex_count(), 7);
    }

    #[test]
    fn crease_propagates_to_both_halves() {
        let mut parent = cube_topology();
        assert!(parent.set_crease(0, 1, 3.0));

        let child = split_topology(&parent).unwrap();
        let creased: Vec<_> = child.creased_edges().collect();
        assert_eq!(creased.len(), 2);

        // Edge (0, 1) is parent edge 0, so its edge-point is 14.
        for half in [(0, 14), (1, 14)] {
            let ei = child.edge_between(half.0, half.1).unwrap();
            assert!((child.edges[ei as usize].crease - 2.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn smooth_edges_stay_smooth() {
        let parent = cube_topology();
        let child = split_topology(&parent).unwrap();
        assert_eq!(child.creased_edges().count(), 0);
    }

    #[test]
    fn crease_floors_at_zero() {
        let mut parent = cube_topology();
        assert!(parent.set_crease(0, 1, 0.5));

        let child = split_topology(&parent).unwrap();
        // 0.5 decays to 0: the halves exist but are no longer sharp.
        assert_eq!(child.creased_edges().count(), 0);
    }
}
