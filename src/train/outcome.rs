use serde::{Serialize, Deserialize};

use crate::model::linear::LinearModel;

/// Result of a training run: final parameters plus the cost samples recorded
/// along the way (one every `COST_RECORD_INTERVAL` iterations, starting at 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    pub model: LinearModel,
    pub cost_history: Vec<f64>,
}

impl TrainOutcome {
    pub fn weights(&self) -> &[f64] {
        &self.model.weights
    }

    pub fn bias(&self) -> f64 {
        self.model.bias
    }

    /// Last recorded cost, if the loop ran at all.
    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}
