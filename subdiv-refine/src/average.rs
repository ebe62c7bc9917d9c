//! Position averaging: child positions per the Catmull-Clark rules.

// Valence counts are tiny; the usize -> f64 casts are exact.
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};
use subdiv_topology::Topology;

/// Compute one position per child vertex.
///
/// `child` must be the topology produced by splitting `parent` (its
/// vertex numbering is `[0, V)` originals, `[V, V + F)` face-points,
/// `[V + F, V + F + E)` edge-points). Rules, in computation order:
///
/// 1. **Face-points**: arithmetic mean of the parent face's corners.
/// 2. **Edge-points**: for a smooth edge, the mean of both endpoints
///    and the adjacent face-points (boundary edges average only what
///    exists); for a creased edge, the endpoint midpoint.
/// 3. **Vertex-points**: a vertex with any creased incident edge keeps
///    its parent position. Otherwise `(F + 2R + (n - 3) * P) / n` with
///    `n` the incident-edge valence, `R` the mean of incident edge
///    midpoints, and `F` the mean of the face-points just computed for
///    the incident faces.
///
/// The ordering matters: the vertex rule reads face-points out of the
/// output array, so face-points are filled first.
///
/// # Panics
///
/// Panics if `positions` is shorter than the parent vertex table or
/// `child` was not derived from `parent`'s split. The chain upholds
/// both.
#[must_use]
pub fn average_positions(
    parent: &Topology,
    positions: &[Point3<f64>],
    child: &Topology,
) -> Vec<Point3<f64>> {
    let v = parent.vertex_count();
    let f = parent.face_count();

    let mut out = vec![Point3::origin(); child.vertex_count()];

    // Face-points.
    for (fi, face) in parent.faces.iter().enumerate() {
        let sum: Vector3<f64> = face
            .verts
            .iter()
            .map(|&vi| positions[vi as usize].coords)
            .sum();
        out[v + fi] = Point3::from(sum / face.verts.len() as f64);
    }

    // Edge-points.
    for (ei, edge) in parent.edges.iter().enumerate() {
        let p0 = positions[edge.v0 as usize].coords;
        let p1 = positions[edge.v1 as usize].coords;

        out[v + f + ei] = if edge.is_creased() {
            Point3::from((p0 + p1) / 2.0)
        } else {
            let mut sum = p0 + p1;
            let mut count = 2.0;
            for fi in edge.faces() {
                sum += out[v + fi as usize].coords;
                count += 1.0;
            }
            Point3::from(sum / count)
        };
    }

    // Vertex-points.
    for (vi, vert) in parent.verts.iter().enumerate() {
        let p = positions[vi];

        let sharp = vert
            .edges
            .iter()
            .any(|&ei| parent.edges[ei as usize].is_creased());
        if sharp || vert.edges.is_empty() || vert.faces.is_empty() {
            out[vi] = p;
            continue;
        }

        let n = vert.edges.len() as f64;

        let midpoint_sum: Vector3<f64> = vert
            .edges
            .iter()
            .map(|&ei| {
                let edge = &parent.edges[ei as usize];
                (positions[edge.v0 as usize].coords + positions[edge.v1 as usize].coords) / 2.0
            })
            .sum();
        let r = midpoint_sum / n;

        let face_point_sum: Vector3<f64> = vert
            .faces
            .iter()
            .map(|&fi| out[v + fi as usize].coords)
            .sum();
        let f_avg = face_point_sum / vert.faces.len() as f64;

        out[vi] = Point3::from((f_avg + 2.0 * r + (n - 3.0) * p.coords) / n);
    }

    out
}
