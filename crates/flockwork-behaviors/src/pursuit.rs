//! Pursuit: pure seek toward a target entity's current position.
//!
//! No prediction or interception. The target is a weak, generation-checked
//! id; a target missing from the snapshot counts as no target at all.

use flockwork_core::ids::EntityId;
use flockwork_core::state::WorldSnapshot;
use flockwork_core::types::{Position, Velocity};

use crate::config::PursuitConfig;

#[derive(Debug, Clone)]
pub struct Pursuit {
    config: PursuitConfig,
    target: Option<EntityId>,
}

impl Pursuit {
    pub fn new(config: PursuitConfig) -> Self {
        Self {
            config,
            target: None,
        }
    }

    pub fn config(&self) -> &PursuitConfig {
        &self.config
    }

    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// Replace the current target. No validation: a bad id simply never
    /// resolves.
    pub fn set_target(&mut self, target: EntityId) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Seek the target from `position`. Without a resolvable target,
    /// `velocity` is left untouched.
    pub fn update(&self, position: &Position, world: &WorldSnapshot, velocity: &mut Velocity) {
        let Some(target_id) = self.target else {
            return;
        };
        let Some(target) = world.get(target_id) else {
            log::trace!("pursuit: target {target_id} not in snapshot");
            return;
        };

        *velocity = seek(position, &target.position, self.config.speed);
    }
}

/// Velocity of magnitude `speed` pointing from `from` straight at `to`.
/// Co-located points yield exactly zero.
pub fn seek(from: &Position, to: &Position, speed: f64) -> Velocity {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance > 0.0 {
        Velocity::new(dx / distance * speed, dy / distance * speed)
    } else {
        Velocity::ZERO
    }
}
