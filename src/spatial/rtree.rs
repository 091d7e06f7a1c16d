//! R-tree based spatial index using the rstar crate.
//!
//! Backs the neighbor query of the force pass: all nodes within
//! `desired_separation` of a given node, in O(log n) per query instead of the
//! all-pairs scan. The index stores curve indices against the positions they
//! had at rebuild time; it is rebuilt from the committed curve at the start
//! of each step and treated as read-only for the rest of it.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nalgebra::Point2;

/// A curve node in the spatial index: its sequence index plus the position
/// it was indexed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Index into the curve's node sequence at rebuild time.
    pub index: usize,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl CurvePoint {
    /// Create a new CurvePoint.
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

impl RTreeObject for CurvePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for CurvePoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.x == point[0] && self.y == point[1]
    }
}

/// Spatial index over the nodes of a curve.
pub struct SpatialIndex {
    tree: RTree<CurvePoint>,
}

impl SpatialIndex {
    /// Create a new empty spatial index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Rebuild the index from the curve's positions in sequence order.
    ///
    /// Bulk loading is cheaper than incremental inserts and every position
    /// may have moved since the previous step anyway.
    pub fn rebuild(&mut self, positions: impl Iterator<Item = Point2<f64>>) {
        let points: Vec<_> = positions
            .enumerate()
            .map(|(index, p)| CurvePoint::new(index, p.x, p.y))
            .collect();

        self.tree = RTree::bulk_load(points);
    }

    /// Indices of all indexed nodes with distance to `(x, y)` strictly less
    /// than `radius`.
    ///
    /// rstar's `locate_within_distance` is inclusive at the boundary, so the
    /// strict predicate is re-applied on the candidates; the result set is
    /// exactly what a brute-force scan with `d < radius` would produce.
    pub fn in_radius(&self, x: f64, y: f64, radius: f64) -> Vec<usize> {
        let radius_sq = radius * radius;
        self.tree
            .locate_within_distance([x, y], radius_sq)
            .filter(|point| point.distance_2(&[x, y]) < radius_sq)
            .map(|point| point.index)
            .collect()
    }

    /// Clear all nodes from the index.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
