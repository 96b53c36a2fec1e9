//! FLOCKWORK headless frame loop.
//!
//! Wires the simulation engine to a command line, a logger and a frame
//! loop that supplies `dt` each frame. Rendering is left to whoever reads
//! the dumped `FrameSnapshot`.

pub mod cli;
pub mod game_loop;
pub mod logging;

pub use flockwork_core as core;
