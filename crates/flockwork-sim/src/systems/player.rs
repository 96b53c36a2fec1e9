//! Direct control of the player entity.

use glam::DVec2;
use hecs::World;

use flockwork_core::components::{Active, Player, PlayerControl};
use flockwork_core::types::Velocity;

/// Replace the player's velocity with `input * speed`, per axis.
///
/// Zero input stops the player; velocity does not carry over between frames.
pub fn run(world: &mut World, input: DVec2) {
    for (_entity, (_player, control, vel, active)) in
        world.query_mut::<(&Player, &PlayerControl, &mut Velocity, &Active)>()
    {
        if !active.0 {
            continue;
        }
        *vel = Velocity::from(input * control.speed);
    }
}
