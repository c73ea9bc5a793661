use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draws `n` independent samples from N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| -> f64 { StandardNormal.sample(&mut *rng) })
        .collect()
}
