//! Command line for the `flockwork` binary.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use flockwork_core::constants::FPS;
use flockwork_sim::SimConfig;

#[derive(Debug, Parser)]
#[command(name = "flockwork", about = "Run the steering simulation headless")]
pub struct Cli {
    /// JSON config file. Missing fields take defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the config's RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated seconds to run.
    #[arg(long, default_value_t = 10.0)]
    pub seconds: f64,

    /// Frames per second.
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Override the number of boids in the demo scene.
    #[arg(long)]
    pub flock: Option<usize>,

    /// Pace frames to wall-clock time and use measured deltas.
    #[arg(long)]
    pub realtime: bool,

    /// Write the final frame snapshot here as JSON.
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The config to run with: file (or defaults) plus command-line overrides.
    pub fn sim_config(&self) -> anyhow::Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(flock) = self.flock {
            config.flock_size = flock;
        }
        Ok(config)
    }

    /// Number of frames covering `seconds` at `fps`.
    pub fn frame_count(&self) -> anyhow::Result<u64> {
        if !self.seconds.is_finite() || self.seconds < 0.0 {
            bail!("--seconds must be a non-negative number, got {}", self.seconds);
        }
        Ok((self.seconds * f64::from(self.fps)).round() as u64)
    }
}
