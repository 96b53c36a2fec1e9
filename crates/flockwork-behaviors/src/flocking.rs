//! Flocking (boids): separation, alignment and cohesion over the entities
//! within a neighbor radius, blended and normalized to a fixed speed.
//!
//! The neighbor set is rebuilt from scratch every tick by a full scan of
//! the snapshot.

use glam::DVec2;

use flockwork_core::ids::EntityId;
use flockwork_core::state::{EntityState, WorldSnapshot};
use flockwork_core::types::{Position, Velocity};

use crate::config::FlockingConfig;

#[derive(Debug, Clone)]
pub struct Flocking {
    config: FlockingConfig,
    /// Neighbors found on the last update.
    neighbors: Vec<EntityState>,
}

/// The three component forces of one update, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlockForces {
    pub separation: DVec2,
    pub alignment: DVec2,
    pub cohesion: DVec2,
}

impl FlockForces {
    /// Weighted sum of the three forces, per axis.
    pub fn blend(&self, config: &FlockingConfig) -> DVec2 {
        self.separation * config.separation_weight
            + self.alignment * config.alignment_weight
            + self.cohesion * config.cohesion_weight
    }
}

impl Flocking {
    pub fn new(config: FlockingConfig) -> Self {
        Self {
            config,
            neighbors: Vec::new(),
        }
    }

    pub fn config(&self) -> &FlockingConfig {
        &self.config
    }

    /// Ids of the neighbors found on the last update.
    pub fn neighbors(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.neighbors.iter().map(|n| n.id)
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Rescan `world` for neighbors of `me`, discarding the previous set.
    pub fn find_neighbors(&mut self, me: EntityId, position: &Position, world: &WorldSnapshot) {
        let radius = self.config.neighbor_radius;
        self.neighbors.clear();
        self.neighbors.extend(
            world
                .iter()
                .filter(|other| other.id != me)
                .filter(|other| position.distance_to(&other.position) < radius)
                .copied(),
        );
    }

    /// Forces acting on an entity at `position` from the current neighbor set.
    pub fn forces(&self, position: &Position) -> FlockForces {
        FlockForces {
            separation: separation(position, &self.neighbors),
            alignment: alignment(&self.neighbors),
            cohesion: cohesion(position, &self.neighbors),
        }
    }

    /// Rebuild the neighbor set, then steer along the blended force at
    /// `config.speed`. A zero blended force leaves `velocity` unchanged.
    pub fn update(
        &mut self,
        me: EntityId,
        position: &Position,
        world: &WorldSnapshot,
        velocity: &mut Velocity,
    ) {
        self.find_neighbors(me, position, world);

        let total = self.forces(position).blend(&self.config);
        let magnitude = total.length();
        if magnitude > 0.0 {
            *velocity = Velocity::from(total / magnitude * self.config.speed);
        }
    }
}

/// Sum of unit vectors pointing from each neighbor toward `position`.
/// Neighbors sitting exactly on `position` contribute nothing.
pub fn separation(position: &Position, neighbors: &[EntityState]) -> DVec2 {
    let me = position.as_dvec2();
    neighbors
        .iter()
        .map(|n| me - n.position.as_dvec2())
        .filter_map(|away| {
            let distance = away.length();
            (distance > 0.0).then(|| away / distance)
        })
        .sum()
}

/// Mean neighbor velocity.
pub fn alignment(neighbors: &[EntityState]) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let total: DVec2 = neighbors.iter().map(|n| n.velocity.as_dvec2()).sum();
    total / neighbors.len() as f64
}

/// Vector from `position` to the neighbors' centroid.
pub fn cohesion(position: &Position, neighbors: &[EntityState]) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let total: DVec2 = neighbors.iter().map(|n| n.position.as_dvec2()).sum();
    total / neighbors.len() as f64 - position.as_dvec2()
}
