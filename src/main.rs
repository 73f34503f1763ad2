use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use grid_exploration::config::Config;
use grid_exploration::{
    Agent, ConsoleObserver, CsvObserver, Exploration, GridMap, RandomPolicy,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let map = GridMap::load(&config.scenario)
        .with_context(|| format!("Failed to load scenario {}", config.scenario.display()))?;
    print!("{}", map);

    let agent = Agent::with_config(&map, config.start(), config.agent_config())?;
    let policy = match config.seed {
        Some(seed) => RandomPolicy::seeded(seed),
        None => RandomPolicy::from_thread_rng().context("Failed to seed random policy")?,
    };

    let mut trace = match &config.trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create trace {}", path.display()))?;
            Some(CsvObserver::new(file)?)
        }
        None => None,
    };

    let stdout = io::stdout();
    let mut console = ConsoleObserver::new(stdout.lock(), !config.quiet_map);
    let mut exploration = Exploration::new(agent, policy);
    let summary = exploration.run(&mut (&mut console, &mut trace))?;
    if let Some(trace) = trace.as_mut() {
        trace.flush()?;
    }

    println!(
        "Finished after {} moves at {} with {} cells visited",
        summary.steps, summary.final_position, summary.visited
    );
    Ok(())
}
