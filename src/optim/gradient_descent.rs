/// Plain gradient step: `p ← p − learning_rate·g`.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies one update to weights and bias from gradients computed at the
    /// pre-update parameters.
    ///
    /// # Panics
    /// Panics if `dw` and `weights` differ in length.
    pub fn step(&self, weights: &mut [f64], bias: &mut f64, dw: &[f64], db: f64) {
        if weights.len() != dw.len() {
            panic!("Weights and gradient are of incorrect sizes")
        }

        let lr = self.learning_rate;

        for (w, g) in weights.iter_mut().zip(dw) {
            *w -= lr * g;
        }
        *bias -= lr * db;
    }
}
