//! Frame loop: computes `dt` each frame and advances the engine.
//!
//! Headless runs use a fixed `dt` of one frame and never sleep. Real-time
//! runs sleep until the next frame is due and feed the engine the measured
//! wall-clock delta instead.

use std::time::{Duration, Instant};

use flockwork_core::state::FrameSnapshot;
use flockwork_sim::SimulationEngine;

/// Drives a `SimulationEngine` for a number of frames.
pub struct FrameLoop {
    frame_duration: Duration,
    realtime: bool,
}

impl FrameLoop {
    /// `fps` must be non-zero.
    pub fn new(fps: u32, realtime: bool) -> Self {
        Self {
            frame_duration: Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1))),
            realtime,
        }
    }

    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Run `frames` frames and return the last snapshot (or the state
    /// before any frame if `frames` is zero).
    pub fn run(&self, engine: &mut SimulationEngine, frames: u64) -> FrameSnapshot {
        if self.realtime {
            self.run_realtime(engine, frames)
        } else {
            self.run_fixed(engine, frames)
        }
    }

    fn run_fixed(&self, engine: &mut SimulationEngine, frames: u64) -> FrameSnapshot {
        let dt = self.frame_duration.as_secs_f64();
        let mut snapshot = FrameSnapshot {
            time: engine.time(),
            ..Default::default()
        };
        for _ in 0..frames {
            snapshot = engine.tick(dt);
        }
        snapshot
    }

    fn run_realtime(&self, engine: &mut SimulationEngine, frames: u64) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot {
            time: engine.time(),
            ..Default::default()
        };
        let mut last_frame = Instant::now();
        let mut next_frame_time = last_frame + self.frame_duration;

        for _ in 0..frames {
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > self.frame_duration * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                log::debug!("frame loop fell behind by {:?}", now - next_frame_time);
                next_frame_time = now;
            }
            next_frame_time += self.frame_duration;

            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            snapshot = engine.tick(dt);
        }
        snapshot
    }
}
