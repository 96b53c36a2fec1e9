//! The steering agent: one behavior bound to one entity.

use flockwork_core::enums::BehaviorKind;
use flockwork_core::ids::EntityId;
use flockwork_core::state::WorldSnapshot;
use flockwork_core::types::Velocity;

use crate::config::{FlockingConfig, PursuitConfig, WanderConfig};
use crate::flocking::Flocking;
use crate::pursuit::Pursuit;
use crate::wander::Wander;

/// The closed set of behaviors an agent can run.
#[derive(Debug, Clone)]
pub enum Behavior {
    Wander(Wander),
    Pursuit(Pursuit),
    Flocking(Flocking),
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Wander(_) => BehaviorKind::Wander,
            Behavior::Pursuit(_) => BehaviorKind::Pursuit,
            Behavior::Flocking(_) => BehaviorKind::Flocking,
        }
    }
}

/// Controls the velocity of exactly one entity.
///
/// The entity id is fixed for the agent's lifetime and does not keep the
/// entity alive. Inactive agents must be skipped by whoever drives them.
#[derive(Debug, Clone)]
pub struct SteeringAgent {
    entity: EntityId,
    active: bool,
    behavior: Behavior,
}

impl SteeringAgent {
    pub fn new(entity: EntityId, behavior: Behavior) -> Self {
        Self {
            entity,
            active: true,
            behavior,
        }
    }

    pub fn wander(entity: EntityId, config: WanderConfig, seed: u64) -> Self {
        Self::new(entity, Behavior::Wander(Wander::new(config, seed)))
    }

    pub fn pursuit(entity: EntityId, config: PursuitConfig) -> Self {
        Self::new(entity, Behavior::Pursuit(Pursuit::new(config)))
    }

    pub fn flocking(entity: EntityId, config: FlockingConfig) -> Self {
        Self::new(entity, Behavior::Flocking(Flocking::new(config)))
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn kind(&self) -> BehaviorKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    /// Point a pursuit agent at `target`. Returns `false` (and changes
    /// nothing) for other behaviors.
    pub fn set_target(&mut self, target: EntityId) -> bool {
        match &mut self.behavior {
            Behavior::Pursuit(pursuit) => {
                pursuit.set_target(target);
                true
            }
            _ => false,
        }
    }

    /// Drop a pursuit agent's target. Returns `false` for other behaviors.
    pub fn clear_target(&mut self) -> bool {
        match &mut self.behavior {
            Behavior::Pursuit(pursuit) => {
                pursuit.clear_target();
                true
            }
            _ => false,
        }
    }

    /// Current pursuit target, if this is a pursuit agent with one.
    pub fn target(&self) -> Option<EntityId> {
        match &self.behavior {
            Behavior::Pursuit(pursuit) => pursuit.target(),
            _ => None,
        }
    }

    /// Run one tick of the behavior, writing into `velocity` (the
    /// controlled entity's velocity).
    ///
    /// Pursuit and flocking read the entity's own position from `world`;
    /// if the entity is absent there (inactive or gone) they do nothing.
    pub fn update(&mut self, dt: f64, world: &WorldSnapshot, velocity: &mut Velocity) {
        match &mut self.behavior {
            Behavior::Wander(wander) => wander.update(dt, velocity),
            Behavior::Pursuit(pursuit) => {
                if let Some(me) = world.get(self.entity) {
                    pursuit.update(&me.position, world, velocity);
                }
            }
            Behavior::Flocking(flocking) => {
                if let Some(me) = world.get(self.entity) {
                    flocking.update(self.entity, &me.position, world, velocity);
                }
            }
        }
    }
}
