//! Serializable, generation-checked entity handles.
//!
//! An `EntityId` wraps the bit pattern of a `hecs::Entity`. The bits carry
//! both the slot index and its generation, so an id kept after its entity
//! was despawned never resolves to whatever reuses the slot.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Reconstruct an id from raw bits. Returns `None` for bits that can
    /// never name an entity.
    pub fn from_bits(bits: u64) -> Option<Self> {
        hecs::Entity::from_bits(bits).map(Self::from)
    }

    pub fn to_bits(self) -> u64 {
        self.0
    }

    /// The ECS handle this id names.
    pub fn entity(self) -> hecs::Entity {
        // Every EntityId is built from a live hecs::Entity (see `From` and
        // `from_bits`), so the bits always decode.
        hecs::Entity::from_bits(self.0).unwrap_or(hecs::Entity::DANGLING)
    }
}

impl From<hecs::Entity> for EntityId {
    fn from(entity: hecs::Entity) -> Self {
        Self(entity.to_bits().get())
    }
}

impl From<EntityId> for hecs::Entity {
    fn from(id: EntityId) -> Self {
        id.entity()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.entity())
    }
}
