use crate::math::matrix::Matrix;

/// A differentiable cost over the parameters `(w, b)` of a linear model.
///
/// The training loop only ever talks to the cost through these two methods, so
/// any implementor can be dropped in without touching the loop.
pub trait Objective {
    /// Scalar cost of predicting `X·w + b` against `y`.
    fn cost(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> f64;

    /// `(∂cost/∂w, ∂cost/∂b)` at `(w, b)`.
    fn gradient(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> (Vec<f64>, f64);
}

/// `X·w + b − y`, one entry per sample.
///
/// # Panics
/// Panics if `y.len()` differs from the number of rows in `x`, or `w.len()`
/// from the number of columns.
pub(crate) fn residuals(x: &Matrix, y: &[f64], w: &[f64], b: f64) -> Vec<f64> {
    if y.len() != x.rows {
        panic!("Matrix and target vector are of incorrect sizes")
    }

    x.affine(w, b)
        .into_iter()
        .zip(y)
        .map(|(p, y)| p - y)
        .collect()
}
