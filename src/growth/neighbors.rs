//! Neighbor query feeding the separation force.
//!
//! Returns the nodes within `desired_separation` of a given node, excluding
//! the node itself and its topological neighbors. Adjacent nodes are excluded
//! because their spacing is governed by cohesion, not separation.

use crate::growth::curve::Curve;
use crate::spatial::SpatialIndex;

/// Indices of nodes strictly closer than `radius` to node `i`, excluding `i`
/// and its topological neighbors.
///
/// `spatial` must have been rebuilt from `curve`'s current positions; the
/// result is then identical to the brute-force scan over all other nodes.
pub fn non_adjacent_within(
    curve: &Curve,
    spatial: &SpatialIndex,
    i: usize,
    radius: f64,
) -> Vec<usize> {
    let (prev, next) = curve.neighbor_indices(i);
    let p = curve.position(i);

    let mut hits = spatial.in_radius(p.x, p.y, radius);
    hits.retain(|&j| j != i && Some(j) != prev && Some(j) != next);
    hits
}

/// Reference implementation: all-pairs distance comparison with the same
/// inclusion predicate. Correctness of the accelerated query is defined by
/// agreement with this scan.
#[cfg(test)]
pub fn non_adjacent_within_brute_force(curve: &Curve, i: usize, radius: f64) -> Vec<usize> {
    let (prev, next) = curve.neighbor_indices(i);
    let p = curve.position(i);

    (0..curve.len())
        .filter(|&j| j != i && Some(j) != prev && Some(j) != next)
        .filter(|&j| (curve.position(j) - p).norm() < radius)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn rebuilt_index(curve: &Curve) -> SpatialIndex {
        let mut spatial = SpatialIndex::new();
        spatial.rebuild(curve.nodes().iter().map(|n| n.position));
        spatial
    }

    #[test]
    fn test_excludes_self_and_topological_neighbors() {
        // Tight square: every node is within radius of every other, but only
        // the diagonally opposite node is non-adjacent.
        let curve = Curve::circle(Point2::new(0.0, 0.0), 1.0, 4);
        let spatial = rebuilt_index(&curve);

        let hits = non_adjacent_within(&curve, &spatial, 0, 10.0);
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_open_curve_endpoint_exclusions() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        let curve = Curve::from_points(points, false);
        let spatial = rebuilt_index(&curve);

        // Node 0's only topological neighbor is 1; nodes 2 and 3 are fair game.
        let mut hits = non_adjacent_within(&curve, &spatial, 0, 10.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![2, 3]);
    }

    #[test]
    fn test_radius_limits_result() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(100.0, 100.0),
        ];
        let curve = Curve::from_points(points, false);
        let spatial = rebuilt_index(&curve);

        let hits = non_adjacent_within(&curve, &spatial, 0, 5.0);
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_matches_brute_force_on_grown_curve() {
        // A denser ring where the separation radius spans several nodes.
        let curve = Curve::circle(Point2::new(50.0, -20.0), 30.0, 64);
        let spatial = rebuilt_index(&curve);

        for i in 0..curve.len() {
            let mut accelerated = non_adjacent_within(&curve, &spatial, i, 8.0);
            let mut reference = non_adjacent_within_brute_force(&curve, i, 8.0);
            accelerated.sort_unstable();
            reference.sort_unstable();
            assert_eq!(accelerated, reference, "mismatch at node {i}");
        }
    }

    #[test]
    fn test_coincident_node_is_included() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0), // coincides with node 0, not adjacent to it
            Point2::new(-1.0, 0.0),
        ];
        let curve = Curve::from_points(points, false);
        let spatial = rebuilt_index(&curve);

        let hits = non_adjacent_within(&curve, &spatial, 0, 0.5);
        assert_eq!(hits, vec![2]);
    }
}
