//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod homing;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod steering;
