use log::{debug, info};

use crate::loss::objective::Objective;
use crate::math::matrix::Matrix;
use crate::model::linear::LinearModel;
use crate::optim::gradient_descent::GradientDescent;
use crate::train::outcome::TrainOutcome;

/// A cost sample is recorded on every iteration index divisible by this.
pub const COST_RECORD_INTERVAL: usize = 100;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs exactly `num_iterations` steps of batch gradient descent from `(w0, b0)`.
///
/// # Arguments
/// - `x`, `y`          — feature matrix (m × n) and targets (m); only borrowed
/// - `w0`, `b0`        — starting point; copied on entry, never mutated
/// - `learning_rate`   — step size; not validated
/// - `num_iterations`  — iteration budget; `0` returns the starting point
/// - `cost_fn`         — `cost(X, y, w, b)`, sampled for the history
/// - `gradient_fn`     — `gradient(X, y, w, b) -> (dw, db)`
///
/// Each step computes the gradient at the current parameters, then updates
/// weights and bias together. On iterations 0, 100, 200, … the cost is sampled
/// *after* that iteration's update.
///
/// Non-finite values from a diverging learning rate are carried through to
/// the result unchanged.
///
/// # Panics
/// Panics if the dimensions of `x`, `y` and `w0` disagree.
#[allow(clippy::too_many_arguments)]
pub fn gradient_descent<C, G>(
    x: &Matrix,
    y: &[f64],
    w0: &[f64],
    b0: f64,
    learning_rate: f64,
    num_iterations: usize,
    cost_fn: C,
    gradient_fn: G,
) -> TrainOutcome
where
    C: Fn(&Matrix, &[f64], &[f64], f64) -> f64,
    G: Fn(&Matrix, &[f64], &[f64], f64) -> (Vec<f64>, f64),
{
    let optimizer = GradientDescent::new(learning_rate);
    let mut w = w0.to_vec();
    let mut b = b0;
    let mut cost_history = Vec::with_capacity(num_iterations.div_ceil(COST_RECORD_INTERVAL));

    info!(
        "gradient descent: samples={} features={} iterations={num_iterations} learning_rate={learning_rate}",
        x.rows, x.cols
    );

    for i in 0..num_iterations {
        let (dw, db) = gradient_fn(x, y, &w, b);
        optimizer.step(&mut w, &mut b, &dw, db);

        if i % COST_RECORD_INTERVAL == 0 {
            let cost = cost_fn(x, y, &w, b);
            debug!("iteration {i}: cost = {cost:.6}");
            cost_history.push(cost);
        }
    }

    match cost_history.last() {
        Some(cost) => info!("gradient descent finished: last recorded cost = {cost:.6}"),
        None => info!("gradient descent finished without iterating"),
    }

    TrainOutcome {
        model: LinearModel::new(w, b),
        cost_history,
    }
}

/// Same loop as `gradient_descent`, driven through an `Objective`.
pub fn gradient_descent_with<O: Objective + ?Sized>(
    x: &Matrix,
    y: &[f64],
    w0: &[f64],
    b0: f64,
    learning_rate: f64,
    num_iterations: usize,
    objective: &O,
) -> TrainOutcome {
    gradient_descent(
        x,
        y,
        w0,
        b0,
        learning_rate,
        num_iterations,
        |x, y, w, b| objective.cost(x, y, w, b),
        |x, y, w, b| objective.gradient(x, y, w, b),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::loss::mse::{self, MseCost};

    fn line() -> (Matrix, Vec<f64>) {
        let x = Matrix::from_data(vec![vec![1.0], vec![2.0], vec![3.0]]);
        (x, vec![2.0, 4.0, 6.0])
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} != {b}");
    }

    #[test]
    fn single_step_on_a_line() {
        let (x, y) = line();
        let out = gradient_descent(&x, &y, &[0.0], 0.0, 0.1, 1, mse::cost, mse::gradient);

        assert_close(out.weights()[0], 0.1 * 28.0 / 3.0, 1e-12);
        assert_close(out.bias(), 0.4, 1e-12);
        assert_eq!(out.cost_history.len(), 1);
        // recorded with the updated parameters, not the initial ones
        assert_close(out.cost_history[0], mse::cost(&x, &y, out.weights(), out.bias()), 1e-12);
        assert!(out.cost_history[0] < mse::cost(&x, &y, &[0.0], 0.0));
    }

    #[test]
    fn zero_iterations_returns_the_start() {
        let (x, y) = line();
        let out = gradient_descent(&x, &y, &[1.5], -2.0, 0.1, 0, mse::cost, mse::gradient);

        assert_eq!(out.weights(), &[1.5]);
        assert_eq!(out.bias(), -2.0);
        assert!(out.cost_history.is_empty());
        assert_eq!(out.final_cost(), None);
    }

    #[test]
    fn history_is_sampled_every_hundred_iterations() {
        let (x, y) = line();
        for (iterations, expected) in [(1, 1), (99, 1), (100, 1), (101, 2), (250, 3), (1000, 10)] {
            let out = gradient_descent(&x, &y, &[0.0], 0.0, 0.01, iterations, mse::cost, mse::gradient);
            assert_eq!(out.cost_history.len(), expected, "iterations = {iterations}");
        }
    }

    #[test]
    fn caller_weights_are_not_mutated() {
        let (x, y) = line();
        let w0 = vec![0.0];
        let out = gradient_descent(&x, &y, &w0, 0.0, 0.1, 50, mse::cost, mse::gradient);

        assert_eq!(w0, vec![0.0]);
        assert_ne!(out.weights(), w0.as_slice());
    }

    #[test]
    fn injected_evaluators_are_used() {
        let (x, y) = line();
        let gradient_calls = Cell::new(0);
        let cost_calls = Cell::new(0);

        let out = gradient_descent(
            &x,
            &y,
            &[0.0],
            0.0,
            1.0,
            201,
            |_, _, _, _| {
                cost_calls.set(cost_calls.get() + 1);
                -1.0
            },
            |_, _, w, _| {
                gradient_calls.set(gradient_calls.get() + 1);
                (vec![-1.0; w.len()], 0.5)
            },
        );

        assert_eq!(gradient_calls.get(), 201);
        assert_eq!(cost_calls.get(), 3);
        assert_eq!(out.cost_history, vec![-1.0; 3]);
        assert_eq!(out.weights(), &[201.0]);
        assert_eq!(out.bias(), -100.5);
    }

    #[test]
    fn objective_and_closures_agree() {
        let (x, y) = line();
        let by_fn = gradient_descent(&x, &y, &[0.3], 0.1, 0.05, 300, mse::cost, mse::gradient);
        let by_trait = gradient_descent_with(&x, &y, &[0.3], 0.1, 0.05, 300, &MseCost);
        assert_eq!(by_fn, by_trait);
    }

    #[test]
    fn divergence_propagates_without_panicking() {
        let (x, y) = line();
        let out = gradient_descent(&x, &y, &[0.0], 0.0, 10.0, 2000, mse::cost, mse::gradient);

        assert!(!out.bias().is_finite());
        assert!(out.weights().iter().all(|w| !w.is_finite()));
        assert!(!out.final_cost().unwrap().is_finite());
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn mismatched_start_panics() {
        let (x, y) = line();
        gradient_descent(&x, &y, &[0.0, 0.0], 0.0, 0.1, 1, mse::cost, mse::gradient);
    }
}
