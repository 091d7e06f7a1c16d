//! Spatial indexing for sub-quadratic neighbor queries.
//!
//! This module provides an R-tree based spatial index used by the force pass
//! to find the non-adjacent nodes within the separation radius of each node.

mod rtree;

pub use rtree::SpatialIndex;
