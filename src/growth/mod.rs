//! Differential growth simulation core.
//!
//! - `config`: validated simulation parameters
//! - `curve`: ordered node storage with implicit sequence topology
//! - `neighbors`: radius query excluding topological neighbors
//! - `forces`: separation/cohesion steering and clamped integration
//! - `engine`: per-step orchestration (force → commit → mutate)

mod config;
mod curve;
mod engine;
mod forces;
mod neighbors;

pub use config::{ConfigError, GrowthConfig};
pub use curve::{Curve, Node};
pub use engine::GrowthEngine;
pub use neighbors::non_adjacent_within;
