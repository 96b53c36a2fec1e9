//! Homing system: entities with a `Homing` component seek a fixed point.

use hecs::World;

use flockwork_behaviors::pursuit::seek;
use flockwork_core::components::{Active, Homing};
use flockwork_core::types::{Position, Velocity};

/// Steer every active homing entity straight at its point. An entity
/// already sitting on its point keeps its velocity.
pub fn run(world: &mut World) {
    for (_entity, (homing, pos, vel, active)) in
        world.query_mut::<(&Homing, &Position, &mut Velocity, &Active)>()
    {
        if !active.0 || pos.distance_to(&homing.point) == 0.0 {
            continue;
        }
        *vel = seek(pos, &homing.point, homing.speed);
    }
}
