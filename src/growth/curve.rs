//! Ordered node storage for a growing curve.
//!
//! Topology is implicit: consecutive nodes in the sequence are connected, and
//! a closed curve additionally connects the last node back to the first. No
//! edge objects are stored; edges are derived on demand from adjacency.
//!
//! Insertion shifts every subsequent index, so passes that both scan and
//! mutate must either snapshot their index set up front or materialize a
//! fresh sequence (see the topology pass in `engine.rs`).

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};

/// A single point on the curve.
///
/// Nodes are identified by their position in the sequence; indices are not
/// stable across insertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Current position.
    pub position: Point2<f64>,
    /// Velocity carried across steps. New nodes start at rest.
    pub velocity: Vector2<f64>,
}

impl Node {
    /// Create a node at rest at the given position.
    #[inline]
    pub fn at(position: Point2<f64>) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
        }
    }
}

/// Ordered sequence of nodes with implicit sequence-adjacency topology.
#[derive(Debug, Clone)]
pub struct Curve {
    nodes: Vec<Node>,
    closed: bool,
}

impl Curve {
    /// Build a curve from explicit points.
    pub fn from_points(points: impl IntoIterator<Item = Point2<f64>>, closed: bool) -> Self {
        Self {
            nodes: points.into_iter().map(Node::at).collect(),
            closed,
        }
    }

    /// Build a curve from already-constructed nodes, preserving velocities.
    pub(crate) fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        Self { nodes, closed }
    }

    /// Build a closed seed polygon: `n` nodes evenly distributed on a circle.
    ///
    /// Standard parametric construction, angle step `2π / n`, first node at
    /// angle 0 (so `center + (radius, 0)`).
    pub fn circle(center: Point2<f64>, radius: f64, n: usize) -> Self {
        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let theta = TAU * i as f64 / n as f64;
            let x = center.x + radius * theta.cos();
            let y = center.y + radius * theta.sin();
            nodes.push(Node::at(Point2::new(x, y)));
        }
        Self {
            nodes,
            closed: true,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the curve has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the last node connects back to the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// All nodes in sequence order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to all nodes in sequence order.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Position of the node at `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Point2<f64> {
        self.nodes[i].position
    }

    /// Topological neighbors of node `i` as `(prev, next)`.
    ///
    /// A closed curve wraps around; an open curve's endpoints have a single
    /// neighbor and return `None` on the missing side.
    pub fn neighbor_indices(&self, i: usize) -> (Option<usize>, Option<usize>) {
        let n = self.nodes.len();
        debug_assert!(i < n, "node index {i} out of bounds for curve of {n}");

        if self.closed {
            (Some((i + n - 1) % n), Some((i + 1) % n))
        } else {
            let prev = (i > 0).then(|| i - 1);
            let next = (i + 1 < n).then_some(i + 1);
            (prev, next)
        }
    }

    /// Splice a node after index `i`, shifting all subsequent indices by one.
    pub fn insert_after(&mut self, i: usize, position: Point2<f64>) {
        self.nodes.insert(i + 1, Node::at(position));
    }

    /// Edges as index pairs `(i, j)` in sequence order.
    ///
    /// Includes the wraparound edge `(len - 1, 0)` when the curve is closed
    /// and has more than one node.
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        let wrap = self.closed && n > 1;
        (0..n.saturating_sub(1))
            .map(|i| (i, i + 1))
            .chain(wrap.then(|| (n - 1, 0)))
    }

    /// Length of the edge from node `i` to node `j`.
    #[inline]
    pub fn edge_length(&self, i: usize, j: usize) -> f64 {
        (self.nodes[j].position - self.nodes[i].position).norm()
    }

    /// Positions flattened to `[x0, y0, x1, y1, ...]` for export.
    pub fn positions_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.nodes.len() * 2);
        for node in &self.nodes {
            flat.push(node.position.x);
            flat.push(node.position.y);
        }
        flat
    }
}
