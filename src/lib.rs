//! Differential Growth - WASM Module
//!
//! Organic, continuously-elongating curve networks: a seed polygon is relaxed
//! under local physical rules every simulation step (separation from nearby
//! non-adjacent nodes, cohesion toward topological neighbors, force and speed
//! clamping), and new nodes are inserted wherever an edge stretches past its
//! limit. The result is an emergent, coral-like curve for generative-art
//! rendering.
//!
//! This crate is compiled to WebAssembly and exposes a JavaScript-friendly
//! API via wasm-bindgen. The engine itself owns no rendering, scheduling, or
//! export concerns; a caller drives it by invoking `step()` once per frame
//! and feeding the returned flattened point list to whatever draws it.
//!
//! # Architecture
//!
//! - `growth`: the simulation core (configuration, curve, forces, engine)
//! - `spatial`: R-tree spatial indexing for sub-quadratic neighbor queries

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod growth;
pub mod spatial;

use growth::{GrowthConfig, GrowthEngine};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main entry point for the growth engine.
///
/// Wraps the internal [`GrowthEngine`] and provides the public API exposed
/// to JavaScript. Positions cross the boundary as flattened `Float64Array`s
/// (`[x0, y0, x1, y1, ...]`); consumers map consecutive pairs to vertices
/// and, for the closed curve this engine grows, connect the last vertex back
/// to the first.
#[wasm_bindgen]
pub struct DifferentialGrowthWasm {
    engine: GrowthEngine,
}

#[wasm_bindgen]
impl DifferentialGrowthWasm {
    /// Create an engine from a configuration object.
    ///
    /// Expects `{ centerX, centerY, nStartingPoints, radius, maxForce,
    /// maxSpeed, desiredSeparation, separationCohesionRatio, maxEdgeLength }`
    /// with every field present. Throws on a malformed or invalid
    /// configuration; an engine that constructs successfully never fails a
    /// step.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DifferentialGrowthWasm, JsError> {
        let config: GrowthConfig = serde_wasm_bindgen::from_value(config)?;
        let engine = GrowthEngine::new(config)?;
        Ok(Self { engine })
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the resulting point sequence as `[x0, y0, x1, y1, ...]`.
    pub fn step(&mut self) -> Float64Array {
        Float64Array::from(&self.engine.step()[..])
    }

    /// Current point sequence without advancing the simulation.
    ///
    /// Snapshot export for rendering and serialization collaborators that
    /// run independently of the stepping cadence.
    pub fn positions(&self) -> Float64Array {
        Float64Array::from(&self.engine.positions()[..])
    }

    /// Current number of nodes on the curve.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.engine.node_count() as u32
    }

    /// Discard the current curve and reseed from a new configuration.
    pub fn reset(&mut self, config: JsValue) -> Result<(), JsError> {
        let config: GrowthConfig = serde_wasm_bindgen::from_value(config)?;
        self.engine.reset(config)?;
        Ok(())
    }
}
