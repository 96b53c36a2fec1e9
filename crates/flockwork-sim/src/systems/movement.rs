//! Kinematic integration system.
//!
//! Updates Position from Velocity each frame: position += velocity * dt.
//! Also keeps the directly controlled player inside the world rectangle.

use hecs::World;

use flockwork_core::components::{Active, Player};
use flockwork_core::types::{Extent, Position, Velocity};

/// Integrate every active entity with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, active)) in world.query_mut::<(&mut Position, &Velocity, &Active)>() {
        if !active.0 {
            continue;
        }
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

/// Clamp the player's bounding box to `[0, width] x [0, height]`.
pub fn clamp_players(world: &mut World, width: f64, height: f64) {
    for (_entity, (_player, pos, extent)) in
        world.query_mut::<(&Player, &mut Position, &Extent)>()
    {
        pos.x = pos.x.min(width - extent.width).max(0.0);
        pos.y = pos.y.min(height - extent.height).max(0.0);
    }
}
