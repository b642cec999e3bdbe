//! Outcome of a single scenario run

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Seed used for the random fill, if any
    pub seed: Option<u64>,
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub initial_living_cells: usize,
    pub final_living_cells: usize,
    /// Generations after which the final state repeats, if found within the search limit
    pub final_period: Option<usize>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn final_density(&self) -> f64 {
        self.final_living_cells as f64 / (self.width * self.height) as f64
    }

    /// Short label for the final state
    pub fn classification(&self) -> &'static str {
        match (self.final_living_cells, self.final_period) {
            (0, _) => "Extinct",
            (_, Some(1)) => "Still",
            (_, Some(_)) => "Periodic",
            (_, None) => "Active",
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
