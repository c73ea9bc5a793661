pub mod error;
pub mod math;
pub mod data;
pub mod loss;
pub mod optim;
pub mod model;
pub mod train;

// Convenience re-exports
pub use error::ShapeError;
pub use math::matrix::Matrix;
pub use loss::mse::{cost, gradient, MseCost};
pub use loss::objective::Objective;
pub use optim::gradient_descent::GradientDescent;
pub use model::linear::LinearModel;
pub use train::loop_fn::{gradient_descent, gradient_descent_with};
pub use train::trainer::{train, train_with_config, train_with_rng};
pub use train::{TrainConfig, TrainOutcome};
