//! Simulation engine for FLOCKWORK.
//!
//! Owns the hecs ECS world, applies external commands between frames,
//! runs the systems once per frame for a caller-supplied `dt`, and
//! produces `FrameSnapshot`s for a renderer.

pub mod config;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use flockwork_behaviors as behaviors;
pub use flockwork_core as core;
