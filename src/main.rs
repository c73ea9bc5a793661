// Demo runner: fits a synthetic dataset with a known answer.
//   cargo run                      # built-in defaults
//   cargo run -- config.json       # TrainConfig as JSON
// Set RUST_LOG=debug to see every recorded cost sample.
use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_regression::{data::linear_dataset, train_with_config, TrainConfig};

const TRUE_WEIGHTS: [f64; 3] = [2.0, -3.0, 0.5];
const TRUE_BIAS: f64 = 1.25;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)
            .with_context(|| format!("failed to load training config from {path}"))?,
        None => TrainConfig::new(10_000, 0.1),
    };
    info!("config: {config:?}");

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
    let (x, y) = linear_dataset(200, &TRUE_WEIGHTS, TRUE_BIAS, 0.05, &mut rng);

    let outcome = train_with_config(&x, &y, &config);

    println!("true   w = {TRUE_WEIGHTS:?}, b = {TRUE_BIAS}");
    println!("fitted w = {:.4?}, b = {:.4}", outcome.weights(), outcome.bias());
    for (i, cost) in outcome.cost_history.iter().enumerate().step_by(10) {
        println!("iteration {:>6}: cost = {cost:.6}", i * ferrite_regression::train::COST_RECORD_INTERVAL);
    }

    Ok(())
}
