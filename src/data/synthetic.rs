use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};

use crate::math::matrix::Matrix;

/// Samples `m` rows from `y = X·true_w + true_b + ε`.
///
/// Features are uniform on [-1, 1], so the data is already well scaled for
/// gradient descent. ε ~ N(0, noise_std²).
pub fn linear_dataset<R: Rng + ?Sized>(
    m: usize,
    true_w: &[f64],
    true_b: f64,
    noise_std: f64,
    rng: &mut R,
) -> (Matrix, Vec<f64>) {
    let feature = Uniform::new_inclusive(-1.0, 1.0);

    let data: Vec<Vec<f64>> = (0..m)
        .map(|_| true_w.iter().map(|_| feature.sample(&mut *rng)).collect())
        .collect();

    let targets = data.iter()
        .map(|row| {
            let noise: f64 = StandardNormal.sample(&mut *rng);
            row.iter().zip(true_w).map(|(x, w)| x * w).sum::<f64>() + true_b + noise_std * noise
        })
        .collect();

    let x = Matrix {
        rows: m,
        cols: true_w.len(),
        data,
    };
    (x, targets)
}
