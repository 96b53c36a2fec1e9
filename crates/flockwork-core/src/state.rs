//! Snapshots of the simulation.
//!
//! `WorldSnapshot` is what steering agents read during a frame.
//! `FrameSnapshot` is what a renderer reads after the frame.

use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorKind, EntityRole};
use crate::ids::EntityId;
use crate::types::{Extent, Position, Rect, SimTime, Velocity};

/// Kinematic state of one active entity at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
    pub extent: Extent,
}

/// Read-only view of every active entity, in a stable order.
///
/// Built once per frame and owned, so nothing an agent writes during the
/// frame shows up in another agent's neighbor scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    entities: Vec<EntityState>,
}

impl WorldSnapshot {
    pub fn new(entities: Vec<EntityState>) -> Self {
        Self { entities }
    }

    /// Look up an entity by id. Stale or inactive ids yield `None`.
    pub fn get(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityState> {
        self.entities.iter()
    }

    pub fn entities(&self) -> &[EntityState] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityState> for WorldSnapshot {
    fn from_iter<I: IntoIterator<Item = EntityState>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One entity as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub role: EntityRole,
    pub rect: Rect,
    pub velocity: Velocity,
    pub active: bool,
    /// Steering behavior driving this entity, if any.
    pub behavior: Option<BehaviorKind>,
}

/// Complete visible state after a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub entities: Vec<EntityView>,
}

impl FrameSnapshot {
    pub fn get(&self, id: EntityId) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Count of entities with the given role.
    pub fn count_role(&self, role: EntityRole) -> usize {
        self.entities.iter().filter(|e| e.role == role).count()
    }
}
