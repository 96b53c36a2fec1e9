//! Steering behaviors for FLOCKWORK.
//!
//! Wander, pursuit and flocking, plus the `SteeringAgent` that dispatches
//! between them. Everything here operates on plain data and a read-only
//! `WorldSnapshot`; no ECS access.

pub mod agent;
pub mod config;
pub mod flocking;
pub mod pursuit;
pub mod wander;

pub use agent::{Behavior, SteeringAgent};
pub use config::{FlockingConfig, InvalidConfig, PursuitConfig, SteeringConfig, WanderConfig};
pub use flockwork_core as core;

#[cfg(test)]
mod tests;
