//! Steering system: runs every active agent against one world snapshot.
//!
//! The snapshot is taken once, before any agent runs, so agents never see
//! each other's writes from the same frame and the update order does not
//! matter.

use hecs::World;

use flockwork_behaviors::SteeringAgent;
use flockwork_core::components::Active;
use flockwork_core::types::Velocity;

use super::snapshot;

/// Run all active agents for one frame. Returns how many ran.
pub fn run(world: &mut World, dt: f64) -> usize {
    let snapshot = snapshot::build_world(world);
    let mut updated = 0;

    for (_entity, (agent, vel, active)) in
        world.query_mut::<(&mut SteeringAgent, &mut Velocity, &Active)>()
    {
        if !agent.is_active() || !active.0 {
            continue;
        }
        agent.update(dt, &snapshot, vel);
        updated += 1;
    }

    updated
}
