//! GrowthEngine - owns the configuration and the live curve.
//!
//! One `step()` call is one discrete simulation tick: force pass over the
//! pre-step snapshot, commit of the new positions, then the topology pass
//! that splits over-length edges. The three passes are strictly sequential
//! and a caller only ever observes fully committed, fully mutated state.
//!
//! The curve is exclusively owned here; callers receive flattened position
//! copies, never a live reference.

use nalgebra::Point2;

use crate::growth::config::{ConfigError, GrowthConfig};
use crate::growth::curve::{Curve, Node};
use crate::growth::forces;
use crate::spatial::SpatialIndex;

/// Differential growth simulation engine.
pub struct GrowthEngine {
    config: GrowthConfig,
    curve: Curve,
    spatial: SpatialIndex,
}

impl GrowthEngine {
    /// Validate `config` and seed a closed circle of starting points.
    ///
    /// A malformed configuration is reported here and the engine is never
    /// constructed; nothing is discovered mid-run.
    pub fn new(config: GrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let curve = Curve::circle(
            Point2::new(config.center_x, config.center_y),
            config.radius,
            config.n_starting_points,
        );

        Ok(Self {
            config,
            curve,
            spatial: SpatialIndex::new(),
        })
    }

    /// Discard the current curve and reseed from a new configuration.
    pub fn reset(&mut self, config: GrowthConfig) -> Result<(), ConfigError> {
        let fresh = Self::new(config)?;
        *self = fresh;
        Ok(())
    }

    /// The active configuration.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Current number of nodes.
    pub fn node_count(&self) -> usize {
        self.curve.len()
    }

    /// Read-only view of the live curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Current positions flattened to `[x0, y0, x1, y1, ...]` without
    /// advancing the simulation.
    pub fn positions(&self) -> Vec<f64> {
        self.curve.positions_flat()
    }

    /// Advance the simulation by exactly one tick and return the resulting
    /// flattened position list.
    pub fn step(&mut self) -> Vec<f64> {
        // Force pass: candidates are a pure function of the pre-step
        // snapshot. The spatial index is rebuilt here and read-only until
        // the next step.
        self.spatial
            .rebuild(self.curve.nodes().iter().map(|n| n.position));
        let candidates = forces::compute_candidates(&self.curve, &self.spatial, &self.config);

        self.commit(&candidates);
        self.split_long_edges();

        self.curve.positions_flat()
    }

    /// Commit the force pass results into the curve.
    ///
    /// A node whose candidate would exactly coincide with an adjacent node's
    /// candidate keeps its previous position and comes to rest instead; the
    /// coincidence guard keeps adjacent nodes distinct so later edge math
    /// never divides by a zero length.
    fn commit(&mut self, candidates: &[forces::Candidate]) {
        let n = self.curve.len();

        let coincides_with_adjacent = |i: usize| -> bool {
            let (prev, next) = self.curve.neighbor_indices(i);
            let p = candidates[i].position;
            prev.is_some_and(|j| candidates[j].position == p)
                || next.is_some_and(|j| candidates[j].position == p)
        };

        let rejected: Vec<bool> = (0..n).map(coincides_with_adjacent).collect();

        for (i, node) in self.curve.nodes_mut().iter_mut().enumerate() {
            if rejected[i] {
                node.velocity = nalgebra::Vector2::zeros();
            } else {
                node.velocity = candidates[i].velocity;
                node.position = candidates[i].position;
            }
        }
    }

    /// Topology pass: split every edge longer than `max_edge_length` at its
    /// midpoint, exactly once per step.
    ///
    /// The committed sequence is materialized into a fresh one instead of
    /// being spliced mid-scan, so insertions cannot shift the indices of
    /// edges still waiting to be examined. Existing nodes are never moved
    /// and the node count never decreases.
    fn split_long_edges(&mut self) {
        let n = self.curve.len();
        if n < 2 {
            return;
        }

        let max_len = self.config.max_edge_length;
        let split: Vec<bool> = self
            .curve
            .edge_indices()
            .map(|(i, j)| self.curve.edge_length(i, j) > max_len)
            .collect();

        if !split.iter().any(|&s| s) {
            return;
        }

        let mut nodes = Vec::with_capacity(n + split.iter().filter(|&&s| s).count());
        for (edge, (i, j)) in self.curve.edge_indices().enumerate() {
            nodes.push(self.curve.nodes()[i]);
            if split[edge] {
                let midpoint = nalgebra::center(&self.curve.position(i), &self.curve.position(j));
                nodes.push(Node::at(midpoint));
            }
        }
        // An open curve's final node terminates no edge and is carried over
        // as-is; on a closed curve the wraparound edge already covered it.
        if !self.curve.is_closed() {
            nodes.push(self.curve.nodes()[n - 1]);
        }

        self.curve = Curve::from_nodes(nodes, self.curve.is_closed());
    }
}
