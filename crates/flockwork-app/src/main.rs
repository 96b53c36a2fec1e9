use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use flockwork_app::cli::Cli;
use flockwork_app::game_loop::FrameLoop;
use flockwork_app::logging;
use flockwork_core::enums::EntityRole;
use flockwork_sim::SimulationEngine;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.sim_config()?;
    let frames = cli.frame_count()?;
    log::info!(
        "seed {}, {} boids, {frames} frames at {} fps{}",
        config.seed,
        config.flock_size,
        cli.fps,
        if cli.realtime { " (real time)" } else { "" }
    );

    let mut engine = SimulationEngine::new(config);
    engine.setup_demo_scene();

    let started = Instant::now();
    let snapshot = FrameLoop::new(cli.fps, cli.realtime).run(&mut engine, frames);
    log::info!(
        "simulated {:.2}s in {} frames ({:?} wall clock)",
        snapshot.time.elapsed_secs,
        snapshot.time.tick,
        started.elapsed()
    );

    for role in [
        EntityRole::Player,
        EntityRole::Enemy,
        EntityRole::Chaser,
        EntityRole::Wanderer,
        EntityRole::Boid,
    ] {
        log::debug!("{role:?}: {}", snapshot.count_role(role));
    }

    if let Some(path) = &cli.dump {
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("final snapshot written to {}", path.display());
    }

    Ok(())
}
