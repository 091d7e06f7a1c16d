//! Per-node steering forces: separation, cohesion, and clamped integration.
//!
//! Every candidate position is computed from the same pre-step snapshot of
//! the curve, so no node's force ever sees another node's already-updated
//! position within a step. The pass has no ordering dependency across nodes.
//!
//! Numeric policy: any direction vector with zero magnitude contributes zero
//! force instead of producing NaN through normalization.

use nalgebra::{Point2, Vector2};

use crate::growth::config::GrowthConfig;
use crate::growth::curve::Curve;
use crate::growth::neighbors;
use crate::spatial::SpatialIndex;

/// Outcome of the force pass for one node: the new velocity and the
/// candidate position it produces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub velocity: Vector2<f64>,
    pub position: Point2<f64>,
}

/// Clamp `v` to magnitude `max`. Zero vectors pass through untouched.
#[inline]
fn limit(v: Vector2<f64>, max: f64) -> Vector2<f64> {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        v * (max / norm)
    } else {
        v
    }
}

/// Repulsion from nearby non-adjacent nodes.
///
/// Each neighbor contributes the unit vector pointing away from it, scaled
/// inversely with distance so closer neighbors push harder. A coincident
/// neighbor (distance zero) has no meaningful direction and contributes
/// nothing.
fn separation(curve: &Curve, spatial: &SpatialIndex, i: usize, radius: f64) -> Vector2<f64> {
    let p = curve.position(i);
    let mut steer = Vector2::zeros();

    for j in neighbors::non_adjacent_within(curve, spatial, i, radius) {
        let away = p - curve.position(j);
        let d = away.norm();
        if d > 0.0 {
            steer += away / (d * d);
        }
    }

    steer
}

/// Attraction toward the midpoint of the two topological neighbors, or
/// toward the single neighbor at an open curve's endpoint.
///
/// Pulls the node back toward the local curve shape, resisting
/// separation-driven drift.
fn cohesion(curve: &Curve, i: usize) -> Vector2<f64> {
    let p = curve.position(i);

    match curve.neighbor_indices(i) {
        (Some(prev), Some(next)) => {
            let target = nalgebra::center(&curve.position(prev), &curve.position(next));
            target - p
        }
        (Some(only), None) | (None, Some(only)) => curve.position(only) - p,
        (None, None) => Vector2::zeros(),
    }
}

/// Compute every node's candidate for the step from the pre-step snapshot.
///
/// Steering is `separation * separation_cohesion_ratio + cohesion`, clamped
/// to `max_force`, applied as an acceleration to the node's velocity, which
/// is clamped to `max_speed` and added to the position.
pub(crate) fn compute_candidates(
    curve: &Curve,
    spatial: &SpatialIndex,
    config: &GrowthConfig,
) -> Vec<Candidate> {
    (0..curve.len())
        .map(|i| {
            let sep = separation(curve, spatial, i, config.desired_separation);
            let coh = cohesion(curve, i);
            let steering = limit(sep * config.separation_cohesion_ratio + coh, config.max_force);

            let velocity = limit(curve.nodes()[i].velocity + steering, config.max_speed);
            let position = curve.position(i) + velocity;

            Candidate { velocity, position }
        })
        .collect()
}
