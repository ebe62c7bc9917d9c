//! Per-edge crease sharpness assignments.

use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sharpness assignments for edges of a base mesh.
///
/// Edges are identified by their vertex index pair; the pair is
/// canonicalized so `(a, b)` and `(b, a)` name the same edge. Sharpness
/// is a non-negative scalar: 0 means smooth, a value `k > 0` keeps the
/// edge sharp for `k` refinement levels (the value decays by 1 per
/// level, floored at 0).
///
/// # Example
///
/// ```
/// use subdiv_types::CreaseSet;
///
/// let creases = CreaseSet::new().with_edge(0, 1, 3.0);
/// assert_eq!(creases.sharpness(1, 0), Some(3.0));
/// assert_eq!(creases.sharpness(0, 2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreaseSet {
    edges: HashMap<(u32, u32), f64>,
}

impl CreaseSet {
    /// Create an empty crease set (all edges smooth).
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a sharpness value to an edge.
    ///
    /// The vertex pair is canonicalized; negative sharpness is clamped
    /// to 0. Assigning to the same edge twice replaces the old value.
    pub fn set(&mut self, v0: u32, v1: u32, sharpness: f64) {
        self.edges
            .insert(normalize_edge(v0, v1), sharpness.max(0.0));
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with_edge(mut self, v0: u32, v1: u32, sharpness: f64) -> Self {
        self.set(v0, v1, sharpness);
        self
    }

    /// Look up the sharpness assigned to an edge.
    ///
    /// Returns `None` for edges with no assignment (smooth).
    #[must_use]
    pub fn sharpness(&self, v0: u32, v1: u32) -> Option<f64> {
        self.edges.get(&normalize_edge(v0, v1)).copied()
    }

    /// Iterate over all assignments as `((v0, v1), sharpness)` with
    /// `v0 < v1`.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), f64)> + '_ {
        self.edges.iter().map(|(&edge, &s)| (edge, s))
    }

    /// Number of edges with an assignment.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edges have an assignment.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_lookup() {
        let mut creases = CreaseSet::new();
        creases.set(5, 2, 1.5);

        assert_eq!(creases.sharpness(2, 5), Some(1.5));
        assert_eq!(creases.sharpness(5, 2), Some(1.5));
        assert_eq!(creases.len(), 1);
    }

    #[test]
    fn negative_sharpness_clamped() {
        let creases = CreaseSet::new().with_edge(0, 1, -2.0);
        assert_eq!(creases.sharpness(0, 1), Some(0.0));
    }

    #[test]
    fn reassignment_replaces() {
        let creases = CreaseSet::new().with_edge(0, 1, 1.0).with_edge(1, 0, 4.0);
        assert_eq!(creases.len(), 1);
        assert_eq!(creases.sharpness(0, 1), Some(4.0));
    }

    #[test]
    fn iter_yields_canonical_pairs() {
        let creases = CreaseSet::new().with_edge(7, 3, 2.0);
        let all: Vec<_> = creases.iter().collect();
        assert_eq!(all, vec![((3, 7), 2.0)]);
    }

    #[test]
    fn empty_set() {
        let creases = CreaseSet::new();
        assert!(creases.is_empty());
        assert_eq!(creases.sharpness(0, 1), None);
    }
}
