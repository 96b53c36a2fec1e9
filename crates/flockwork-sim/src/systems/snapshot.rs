//! Snapshot system: reads the ECS world into owned snapshots.
//!
//! This system is read-only. Both snapshots list entities in id order so
//! that agents and renderers see a stable sequence.

use hecs::World;

use flockwork_behaviors::SteeringAgent;
use flockwork_core::components::Active;
use flockwork_core::enums::EntityRole;
use flockwork_core::ids::EntityId;
use flockwork_core::state::{EntityState, EntityView, FrameSnapshot, WorldSnapshot};
use flockwork_core::types::{Extent, Position, SimTime, Velocity};

/// Every active entity's kinematic state, as agents see it this frame.
pub fn build_world(world: &World) -> WorldSnapshot {
    let mut entities: Vec<EntityState> = world
        .query::<(&Position, &Velocity, &Extent, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (pos, vel, extent, _))| EntityState {
            id: EntityId::from(entity),
            position: *pos,
            velocity: *vel,
            extent: *extent,
        })
        .collect();
    entities.sort_by_key(|e| e.id);
    WorldSnapshot::new(entities)
}

/// Everything a renderer needs after the frame, inactive entities included.
pub fn build_frame(world: &World, time: &SimTime) -> FrameSnapshot {
    let mut entities: Vec<EntityView> = world
        .query::<(
            &EntityRole,
            &Position,
            &Extent,
            &Velocity,
            &Active,
            Option<&SteeringAgent>,
        )>()
        .iter()
        .map(|(entity, (role, pos, extent, vel, active, agent))| EntityView {
            id: EntityId::from(entity),
            role: *role,
            rect: pos.bounding_rect(extent),
            velocity: *vel,
            active: active.0,
            behavior: agent.map(SteeringAgent::kind),
        })
        .collect();
    entities.sort_by_key(|e| e.id);

    FrameSnapshot {
        time: *time,
        entities,
    }
}
