//! Normal estimation passes.

use nalgebra::{Point3, Vector3};
use subdiv_topology::Topology;

/// Squared-magnitude threshold below which a normal sum is treated as
/// degenerate and replaced by the zero vector.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Compute one normal per face.
///
/// Each face normal is the sum of cross products over the triangle fan
/// anchored at the face's first vertex, normalized at the end. The sum
/// is area-weighted, so slivers in a non-planar polygon contribute
/// proportionally little.
///
/// A zero-area face produces the zero vector instead of a NaN-laden
/// direction; callers that need a real direction must filter for it.
///
/// # Panics
///
/// Panics if a face references a vertex index outside `positions`.
/// Topology derivation and refinement never produce such a face.
#[must_use]
pub fn face_normals(topo: &Topology, positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
    let mut normals = Vec::with_capacity(topo.face_count());

    for face in &topo.faces {
        let anchor = positions[face.verts[0] as usize];
        let mut sum = Vector3::zeros();
        for window in face.verts[1..].windows(2) {
            let a = positions[window[0] as usize] - anchor;
            let b = positions[window[1] as usize] - anchor;
            sum += a.cross(&b);
        }
        normals.push(normalize_or_zero(sum));
    }

    normals
}

/// Compute one normal per vertex.
///
/// Each vertex normal is the normalized sum of its incident face
/// normals. A vertex with no incident faces (an index-space gap) gets
/// the zero vector, as does a vertex whose face normals cancel out.
#[must_use]
pub fn vertex_normals(topo: &Topology, face_normals: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    let mut normals = Vec::with_capacity(topo.vertex_count());

    for vert in &topo.verts {
        let sum: Vector3<f64> = vert
            .faces
            .iter()
            .map(|&fi| face_normals[fi as usize])
            .sum();
        normals.push(normalize_or_zero(sum));
    }

    normals
}

fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let norm_squared = v.norm_squared();
    if norm_squared > DEGENERATE_EPSILON {
        v / norm_squared.sqrt()
    } else {
        Vector3::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use subdiv_types::cube;

    #[test]
    fn cube_face_normals_are_axes() {
        let mesh = cube();
        let topo = Topology::derive(&mesh.faces).unwrap();
        let normals = face_normals(&topo, &mesh.positions);

        let expected = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        ];

        for (normal, expected) in normals.iter().zip(expected) {
            assert_relative_eq!(*normal, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn cube_vertex_normals_are_corner_diagonals() {
        let mesh = cube();
        let topo = Topology::derive(&mesh.faces).unwrap();
        let fnrm = face_normals(&topo, &mesh.positions);
        let vnrm = vertex_normals(&topo, &fnrm);

        // Each corner's normal is the normalized sum of 3 unit axis
        // normals, i.e. the corner position direction itself.
        for (normal, position) in vnrm.iter().zip(&mesh.positions) {
            let expected = position.coords / 3.0_f64.sqrt();
            assert_relative_eq!(*normal, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn vertex_normals_are_unit_length() {
        let mesh = cube();
        let topo = Topology::derive(&mesh.faces).unwrap();
        let fnrm = face_normals(&topo, &mesh.positions);

        for normal in vertex_normals(&topo, &fnrm) {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_area_face_yields_zero_normal() {
        // All four vertices collinear on the x axis.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];
        let topo = Topology::derive(&[vec![0, 1, 2, 3]]).unwrap();
        let normals = face_normals(&topo, &positions);

        assert_eq!(normals[0], Vector3::zeros());
    }

    #[test]
    fn isolated_vertex_yields_zero_normal() {
        // Vertex 2 is an index-space gap with no incident faces.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(9.0, 9.0, 9.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let topo = Topology::derive(&[vec![0, 1, 3]]).unwrap();
        let fnrm = face_normals(&topo, &positions);
        let vnrm = vertex_normals(&topo, &fnrm);

        assert_eq!(vnrm[2], Vector3::zeros());
        assert_relative_eq!(vnrm[0].norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn nonplanar_quad_normal_is_area_weighted() {
        // Fold one corner of a unit quad out of plane; the normal must
        // still normalize and lean toward +z.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.5),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let topo = Topology::derive(&[vec![0, 1, 2, 3]]).unwrap();
        let normals = face_normals(&topo, &positions);

        assert_relative_eq!(normals[0].norm(), 1.0, epsilon = 1e-12);
        assert!(normals[0].z > 0.5);
    }
}
