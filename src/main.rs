use std::error::Error;

use evodrive::simulation::ecosystem::Ecosystem;
use evodrive::simulation::params::Params;
use log::{info, warn};

/// Tick budget per generation before the run gives up on it.
const MAX_GENERATION_TICKS: u64 = 1_000_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => Params::load_from_file(&path)?,
        None => Params::default(),
    };
    let generations: u32 = match args.next() {
        Some(n) => n.parse()?,
        None => 10,
    };

    println!("Starting self-driving evolution");

    let mut ecosystem = Ecosystem::new(&params)?;
    for _ in 0..generations {
        if ecosystem.run_generation(&params, MAX_GENERATION_TICKS).is_none() {
            warn!(
                "generation {} did not finish within {MAX_GENERATION_TICKS} ticks",
                ecosystem.generation
            );
            break;
        }
    }

    info!(
        "best progress after {} generations: {:.1}",
        ecosystem.generation,
        ecosystem.best_progress().unwrap_or(0.0)
    );
    let history: Vec<_> = ecosystem.history().records().iter().rev().collect();
    println!("{}", serde_json::to_string_pretty(&history)?);

    Ok(())
}
