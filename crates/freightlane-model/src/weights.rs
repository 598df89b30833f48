// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sub-factor weights as integer percentages. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringWeights {
    pub historical_performance: u8,
    pub reliability: u8,
    pub cost_competitiveness: u8,
    pub experience: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            historical_performance: 40,
            reliability: 30,
            cost_competitiveness: 20,
            experience: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightSumError(pub u32);

impl Display for WeightSumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "scoring weights must sum to 100, got {}", self.0)
    }
}

impl std::error::Error for WeightSumError {}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), WeightSumError> {
        let sum = u32::from(self.historical_performance)
            + u32::from(self.reliability)
            + u32::from(self.cost_competitiveness)
            + u32::from(self.experience);
        if sum != 100 {
            return Err(WeightSumError(sum));
        }
        Ok(())
    }
}
