pub mod trainer;
pub mod outcome;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train, train_with_config, train_with_rng};
pub use outcome::TrainOutcome;
pub use train_config::TrainConfig;
pub use loop_fn::{gradient_descent, gradient_descent_with, COST_RECORD_INTERVAL};
