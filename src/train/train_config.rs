use serde::{Serialize, Deserialize};

use crate::loss::loss_type::LossType;

/// Configuration for a `train_with_config` run.
///
/// # Fields
/// - `iterations`    — exact number of gradient steps; there is no early stop
/// - `learning_rate` — step size; not validated, a bad value diverges
/// - `loss`          — objective to minimise (`Mse` when omitted from JSON)
/// - `seed`          — seeds the weight initialisation; `None` draws from entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub loss: LossType,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainConfig {
    /// Creates an unseeded MSE configuration.
    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        TrainConfig {
            iterations,
            learning_rate,
            loss: LossType::Mse,
            seed: None,
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
