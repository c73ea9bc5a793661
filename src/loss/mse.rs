use crate::loss::objective::{residuals, Objective};
use crate::math::matrix::Matrix;

/// Halved mean squared error: `Σ(X·w + b − y)² / (2m)`.
pub fn cost(x: &Matrix, y: &[f64], w: &[f64], b: f64) -> f64 {
    let m = x.rows as f64;
    residuals(x, y, w, b).iter()
        .map(|e| e * e)
        .sum::<f64>() / (2.0 * m)
}

/// Gradient of `cost`: `(Xᵀ·e / m, Σe / m)` where `e = X·w + b − y`.
pub fn gradient(x: &Matrix, y: &[f64], w: &[f64], b: f64) -> (Vec<f64>, f64) {
    let m = x.rows as f64;
    let error = residuals(x, y, w, b);

    let dw = x.transpose_dot(&error)
        .into_iter()
        .map(|g| g / m)
        .collect();
    let db = error.iter().sum::<f64>() / m;

    (dw, db)
}

/// `Objective` wrapper around `cost` and `gradient`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MseCost;

impl Objective for MseCost {
    fn cost(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> f64 {
        cost(x, y, w, b)
    }

    fn gradient(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> (Vec<f64>, f64) {
        gradient(x, y, w, b)
    }
}
