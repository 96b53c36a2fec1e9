//! Core types and definitions for the FLOCKWORK steering simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! kinematic types, components, entity ids, commands, snapshots, and
//! default tuning constants. It knows nothing about how behaviors are
//! computed or how the frame loop is driven.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod ids;
pub mod state;
pub mod types;
