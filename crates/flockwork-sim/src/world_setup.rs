//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, homing enemies and steering-agent entities with
//! appropriate component bundles. Agents are stored on the entity they
//! control, so each spawn reserves the entity first to hand its id to the
//! agent.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flockwork_behaviors::config::{FlockingConfig, PursuitConfig, WanderConfig};
use flockwork_behaviors::SteeringAgent;
use flockwork_core::components::*;
use flockwork_core::constants::*;
use flockwork_core::enums::EntityRole;
use flockwork_core::ids::EntityId;
use flockwork_core::types::{Extent, Position, Velocity};

use crate::config::SimConfig;

/// Set up the demo scene: a player in the middle, a homing enemy in a
/// corner, a chaser on the player, two wanderers and a flock.
pub fn setup_demo_scene(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) {
    let w = config.world_width;
    let h = config.world_height;

    let player = spawn_player(world, config, config.world_center());
    spawn_homing_enemy(world, config, Position::new(w * 0.05, h * 0.05));
    spawn_chaser(
        world,
        config.steering.pursuit,
        Position::new(w * 0.9, h * 0.85),
        Some(player),
    );
    spawn_wanderer(world, rng, config.steering.wander, Position::new(w * 0.2, h * 0.2));
    spawn_wanderer(world, rng, config.steering.wander, Position::new(w * 0.8, h * 0.2));
    spawn_flock(
        world,
        rng,
        config.steering.flocking,
        config.flock_size,
        Position::new(w * 0.25, h * 0.7),
        DEMO_FLOCK_SPREAD,
    );
}

/// Spawn the directly controlled player.
pub fn spawn_player(world: &mut World, config: &SimConfig, position: Position) -> Entity {
    world.spawn((
        Player,
        EntityRole::Player,
        PlayerControl {
            speed: config.player_speed,
        },
        position,
        Velocity::ZERO,
        Extent::square(config.player_size),
        Active(true),
    ))
}

/// Spawn an enemy that homes in on the world centre.
pub fn spawn_homing_enemy(world: &mut World, config: &SimConfig, position: Position) -> Entity {
    world.spawn((
        EntityRole::Enemy,
        Homing {
            point: config.world_center(),
            speed: config.enemy_speed,
        },
        position,
        Velocity::ZERO,
        Extent::square(config.enemy_size),
        Active(true),
    ))
}

/// Spawn a wanderer. Its heading RNG is seeded from `rng`.
pub fn spawn_wanderer(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: WanderConfig,
    position: Position,
) -> Entity {
    let entity = world.reserve_entity();
    let agent = SteeringAgent::wander(EntityId::from(entity), config, rng.gen());
    world.spawn_at(
        entity,
        (
            EntityRole::Wanderer,
            agent,
            position,
            Velocity::ZERO,
            Extent::square(WANDERER_SIZE),
            Active(true),
        ),
    );
    entity
}

/// Spawn a pursuit agent, optionally already locked onto `target`.
pub fn spawn_chaser(
    world: &mut World,
    config: PursuitConfig,
    position: Position,
    target: Option<Entity>,
) -> Entity {
    let entity = world.reserve_entity();
    let mut agent = SteeringAgent::pursuit(EntityId::from(entity), config);
    if let Some(target) = target {
        agent.set_target(EntityId::from(target));
    }
    world.spawn_at(
        entity,
        (
            EntityRole::Chaser,
            agent,
            position,
            Velocity::ZERO,
            Extent::square(CHASER_SIZE),
            Active(true),
        ),
    );
    entity
}

/// Spawn one flocking boid.
pub fn spawn_boid(
    world: &mut World,
    config: FlockingConfig,
    position: Position,
    velocity: Velocity,
) -> Entity {
    let entity = world.reserve_entity();
    let agent = SteeringAgent::flocking(EntityId::from(entity), config);
    world.spawn_at(
        entity,
        (
            EntityRole::Boid,
            agent,
            position,
            velocity,
            Extent::square(BOID_SIZE),
            Active(true),
        ),
    );
    entity
}

/// Scatter `count` boids uniformly over the square of half-width `spread`
/// around `center`, each cruising on a random heading.
pub fn spawn_flock(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: FlockingConfig,
    count: usize,
    center: Position,
    spread: f64,
) -> Vec<Entity> {
    let spread = spread.abs();
    (0..count)
        .map(|_| {
            let position = Position::new(
                center.x + rng.gen_range(-spread..=spread),
                center.y + rng.gen_range(-spread..=spread),
            );
            let heading: f64 = rng.gen_range(0.0..TAU);
            let velocity = Velocity::from_heading(heading, config.speed);
            spawn_boid(world, config, position, velocity)
        })
        .collect()
}
