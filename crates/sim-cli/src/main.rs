mod config;
mod render;

use std::io::{self, Write};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use runtime::logging::TracingRunLogWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = config::Config::from_env()?;
    let seed = config.seed.unwrap_or_else(draw_seed);
    info!(seed, output = config.output.as_str(), "starting simulation");

    let sim_config = config.sim_config(seed);
    let mut log = TracingRunLogWriter;
    let outcome = runtime::run_simulation(&sim_config, &mut log)
        .with_context(|| format!("simulation aborted (seed {seed})"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render(&outcome, &sim_config, config.output, &mut out, &mut log)?;
    out.flush()?;
    Ok(())
}

/// Fresh seed for runs without `SIM_SEED`; it is logged so the run can be
/// replayed.
fn draw_seed() -> u64 {
    StdRng::from_entropy().gen()
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,runtime=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
