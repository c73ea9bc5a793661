use serde::{Serialize, Deserialize};

/// Selects which objective `train_with_config` optimises.
///
/// - `Mse`   — halved mean squared error; the default.
/// - `Huber` — Huber loss (δ=1.0); less sensitive to outlying targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Mse,
    Huber,
}
