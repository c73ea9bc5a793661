use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    loss::{huber::HuberCost, loss_type::LossType, mse, mse::MseCost},
    math::{init::standard_normal, matrix::Matrix},
    train::{
        loop_fn::{gradient_descent, gradient_descent_with},
        outcome::TrainOutcome,
        train_config::TrainConfig,
    },
};

/// Fits `ŷ = X·w + b` by minimising the halved MSE.
///
/// Weights start as independent N(0, 1) draws (one per column of `x`), the
/// bias starts at 0.
pub fn train(x: &Matrix, y: &[f64], num_iterations: usize, learning_rate: f64) -> TrainOutcome {
    train_with_rng(x, y, num_iterations, learning_rate, &mut rand::thread_rng())
}

/// `train` with the weight initialisation drawn from `rng`.
pub fn train_with_rng<R: Rng + ?Sized>(
    x: &Matrix,
    y: &[f64],
    num_iterations: usize,
    learning_rate: f64,
    rng: &mut R,
) -> TrainOutcome {
    let w0 = standard_normal(x.cols, rng);
    gradient_descent(x, y, &w0, 0.0, learning_rate, num_iterations, mse::cost, mse::gradient)
}

/// Runs a training job described by `config`.
pub fn train_with_config(x: &Matrix, y: &[f64], config: &TrainConfig) -> TrainOutcome {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let w0 = standard_normal(x.cols, &mut rng);

    match config.loss {
        LossType::Mse => {
            gradient_descent_with(x, y, &w0, 0.0, config.learning_rate, config.iterations, &MseCost)
        }
        LossType::Huber => gradient_descent_with(
            x,
            y,
            &w0,
            0.0,
            config.learning_rate,
            config.iterations,
            &HuberCost::default(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (Matrix, Vec<f64>) {
        let x = Matrix::from_data(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        (x, vec![3.0, 5.0, 7.0, 9.0])
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let (x, y) = line();
        let a = train_with_rng(&x, &y, 300, 0.05, &mut StdRng::seed_from_u64(1));
        let b = train_with_rng(&x, &y, 300, 0.05, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_iterations_exposes_the_initial_guess() {
        let (x, y) = line();
        let out = train_with_rng(&x, &y, 0, 0.05, &mut StdRng::seed_from_u64(3));
        let expected = standard_normal(1, &mut StdRng::seed_from_u64(3));

        assert_eq!(out.weights(), expected.as_slice());
        assert_eq!(out.bias(), 0.0);
        assert!(out.cost_history.is_empty());
    }

    #[test]
    fn train_recovers_a_line() {
        let (x, y) = line();
        let out = train(&x, &y, 10_000, 0.05);
        assert!((out.weights()[0] - 2.0).abs() < 1e-3);
        assert!((out.bias() - 1.0).abs() < 1e-3);
        assert_eq!(out.cost_history.len(), 100);
    }

    #[test]
    fn config_seed_matches_rng_entry_point() {
        let (x, y) = line();
        let mut config = TrainConfig::new(200, 0.05);
        config.seed = Some(11);

        let by_config = train_with_config(&x, &y, &config);
        let by_rng = train_with_rng(&x, &y, 200, 0.05, &mut StdRng::seed_from_u64(11));
        assert_eq!(by_config, by_rng);
    }

    #[test]
    fn huber_config_also_fits_clean_data() {
        let (x, y) = line();
        let config = TrainConfig {
            iterations: 20_000,
            learning_rate: 0.05,
            loss: LossType::Huber,
            seed: Some(5),
        };
        let out = train_with_config(&x, &y, &config);
        assert!((out.weights()[0] - 2.0).abs() < 1e-2);
        assert!((out.bias() - 1.0).abs() < 1e-2);
    }
}
