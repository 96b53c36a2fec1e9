//! Simulation engine: the per-frame driver of the steering core.
//!
//! `SimulationEngine` owns the hecs ECS world, applies queued commands at
//! frame boundaries, runs all systems for the caller's `dt`, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flockwork_behaviors::SteeringAgent;
use flockwork_core::commands::SimCommand;
use flockwork_core::components::Active;
use flockwork_core::ids::EntityId;
use flockwork_core::state::FrameSnapshot;
use flockwork_core::types::{Position, SimTime, Velocity};

use crate::config::SimConfig;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    player_input: DVec2,
    command_queue: VecDeque<SimCommand>,
}

impl SimulationEngine {
    /// Create an empty simulation with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            player_input: DVec2::ZERO,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// `dt` must be finite and non-negative; anything else runs the frame
    /// with `dt = 0`.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("invalid frame delta {dt}, using 0");
            0.0
        };

        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        systems::snapshot::build_frame(&self.world, &self.time)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current player direction input.
    pub fn player_input(&self) -> DVec2 {
        self.player_input
    }

    /// Current position of an entity, if it still exists.
    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    /// Current velocity of an entity, if it still exists.
    pub fn velocity(&self, entity: Entity) -> Option<Velocity> {
        self.world.get::<&Velocity>(entity).ok().map(|v| *v)
    }

    /// Populate the world with the demo scene.
    pub fn setup_demo_scene(&mut self) {
        world_setup::setup_demo_scene(&mut self.world, &mut self.rng, &self.config);
    }

    pub fn spawn_player(&mut self, position: Position) -> Entity {
        world_setup::spawn_player(&mut self.world, &self.config, position)
    }

    pub fn spawn_homing_enemy(&mut self, position: Position) -> Entity {
        world_setup::spawn_homing_enemy(&mut self.world, &self.config, position)
    }

    pub fn spawn_wanderer(&mut self, position: Position) -> Entity {
        world_setup::spawn_wanderer(
            &mut self.world,
            &mut self.rng,
            self.config.steering.wander,
            position,
        )
    }

    pub fn spawn_chaser(&mut self, position: Position, target: Option<Entity>) -> Entity {
        world_setup::spawn_chaser(
            &mut self.world,
            self.config.steering.pursuit,
            position,
            target,
        )
    }

    pub fn spawn_boid(&mut self, position: Position, velocity: Velocity) -> Entity {
        world_setup::spawn_boid(
            &mut self.world,
            self.config.steering.flocking,
            position,
            velocity,
        )
    }

    pub fn spawn_flock(&mut self, count: usize, center: Position, spread: f64) -> Vec<Entity> {
        world_setup::spawn_flock(
            &mut self.world,
            &mut self.rng,
            self.config.steering.flocking,
            count,
            center,
            spread,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands naming entities that no longer
    /// exist, or that lack the right components, are dropped.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SetPlayerInput { x, y } => {
                self.player_input = DVec2::new(axis_input(x), axis_input(y));
            }
            SimCommand::SetTarget { agent, target } => {
                self.with_agent(agent, |a| a.set_target(target));
            }
            SimCommand::ClearTarget { agent } => {
                self.with_agent(agent, SteeringAgent::clear_target);
            }
            SimCommand::SetAgentActive { agent, active } => {
                self.with_agent(agent, |a| {
                    a.set_active(active);
                    true
                });
            }
            SimCommand::SetEntityActive { entity, active } => {
                match self.world.get::<&mut Active>(entity.entity()) {
                    Ok(mut flag) => flag.0 = active,
                    Err(_) => log::debug!("SetEntityActive: no such entity {entity}"),
                }
            }
            SimCommand::Despawn { entity } => {
                if self.world.despawn(entity.entity()).is_err() {
                    log::debug!("Despawn: no such entity {entity}");
                }
            }
        }
    }

    /// Apply `f` to the agent stored on `agent`. `f` returns whether the
    /// agent accepted the change.
    fn with_agent(&mut self, agent: EntityId, f: impl FnOnce(&mut SteeringAgent) -> bool) {
        match self.world.get::<&mut SteeringAgent>(agent.entity()) {
            Ok(mut steering) => {
                if !f(&mut *steering) {
                    log::debug!("{agent} is a {:?} agent, command ignored", steering.kind());
                }
            }
            Err(_) => log::debug!("no steering agent on {agent}"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Direct control
        systems::player::run(&mut self.world, self.player_input);
        // 2. Homing enemies
        systems::homing::run(&mut self.world);
        // 3. Steering agents, all against one snapshot
        let updated = systems::steering::run(&mut self.world, dt);
        // 4. Integration
        systems::movement::run(&mut self.world, dt);
        // 5. Keep the player on screen
        systems::movement::clamp_players(
            &mut self.world,
            self.config.world_width,
            self.config.world_height,
        );

        log::trace!(
            "frame {}: dt={dt:.4}, {updated} agents updated",
            self.time.tick
        );
    }
}

/// Clamp one axis of direction input to [-1, 1]; non-finite input is 0.
fn axis_input(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
