//! Wander: cruise on a random heading, re-rolled on a fixed interval.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use flockwork_core::types::Velocity;

use crate::config::WanderConfig;

/// Wander state: a countdown timer and the agent's own RNG stream.
#[derive(Debug, Clone)]
pub struct Wander {
    config: WanderConfig,
    timer: f64,
    rng: ChaCha8Rng,
}

impl Wander {
    /// Same config and seed = same sequence of headings.
    pub fn new(config: WanderConfig, seed: u64) -> Self {
        Self {
            config,
            timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Seconds accumulated since the last heading change.
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Advance the timer by `dt`. Once it reaches the interval, pick a new
    /// heading uniformly in `[0, 2π)` and reset. Otherwise `velocity` is
    /// left as it was.
    pub fn update(&mut self, dt: f64, velocity: &mut Velocity) {
        self.timer += dt;

        if self.timer >= self.config.direction_change_interval {
            let angle = self.rng.gen_range(0.0..TAU);
            *velocity = Velocity::from_heading(angle, self.config.speed);
            self.timer = 0.0;
            log::trace!("wander: new heading {angle:.3} rad");
        }
    }
}
