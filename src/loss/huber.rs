use crate::loss::objective::{residuals, Objective};
use crate::math::matrix::Matrix;

/// Huber cost for a linear model: quadratic near zero, linear in the tails.
///
/// `cost = mean(h(e))` where
/// h(e) = 0.5·e²               if |e| ≤ δ
///        δ·(|e| − 0.5·δ)      otherwise
///
/// For residuals inside `delta` this is exactly the halved MSE, so the two
/// objectives agree on well-fitted data and diverge only on outliers.
#[derive(Debug, Clone, Copy)]
pub struct HuberCost {
    pub delta: f64,
}

impl HuberCost {
    pub fn new(delta: f64) -> HuberCost {
        HuberCost { delta }
    }

    /// Clipped residual: e if |e| ≤ δ, else δ·sign(e).
    fn psi(&self, e: f64) -> f64 {
        if e.abs() <= self.delta { e } else { self.delta * e.signum() }
    }
}

impl Default for HuberCost {
    fn default() -> Self {
        HuberCost { delta: 1.0 }
    }
}

impl Objective for HuberCost {
    fn cost(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> f64 {
        let m = x.rows as f64;
        residuals(x, y, w, b).iter()
            .map(|e| {
                if e.abs() <= self.delta {
                    0.5 * e * e
                } else {
                    self.delta * (e.abs() - 0.5 * self.delta)
                }
            })
            .sum::<f64>() / m
    }

    fn gradient(&self, x: &Matrix, y: &[f64], w: &[f64], b: f64) -> (Vec<f64>, f64) {
        let m = x.rows as f64;
        let clipped: Vec<f64> = residuals(x, y, w, b).into_iter()
            .map(|e| self.psi(e))
            .collect();

        let dw = x.transpose_dot(&clipped)
            .into_iter()
            .map(|g| g / m)
            .collect();
        let db = clipped.iter().sum::<f64>() / m;

        (dw, db)
    }
}
