use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Learned parameters of `ŷ = X·w + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> LinearModel {
        LinearModel { weights, bias }
    }

    /// One prediction per row of `x`.
    ///
    /// # Panics
    /// Panics if `x.cols` differs from the number of weights.
    pub fn predict(&self, x: &Matrix) -> Vec<f64> {
        x.affine(&self.weights, self.bias)
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<LinearModel> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
