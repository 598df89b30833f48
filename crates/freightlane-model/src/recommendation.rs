// SPDX-License-Identifier: Apache-2.0

use crate::ids::{CarrierId, LaneId};
use serde::{Deserialize, Serialize};

/// The four named sub-factor scores, each on a [0, 100] scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreFactors {
    pub historical_performance: f64,
    pub reliability: f64,
    pub cost_competitiveness: f64,
    pub experience: f64,
}

impl ScoreFactors {
    #[must_use]
    pub fn all_in_bounds(&self) -> bool {
        [
            self.historical_performance,
            self.reliability,
            self.cost_competitiveness,
            self.experience,
        ]
        .iter()
        .all(|f| f.is_finite() && (0.0..=100.0).contains(f))
    }
}

/// A derived carrier-to-lane match. Recomputed on demand, never stored.
///
/// `match_score` is a function solely of `score_factors`; cost and
/// delivery duration derive from lane distance and carrier rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub lane_id: LaneId,
    pub origin_city: String,
    pub destination_city: String,
    pub carrier_id: CarrierId,
    pub carrier_name: String,
    pub match_score: u8,
    pub estimated_rate: f64,
    pub estimated_cost: u64,
    pub estimated_delivery_hours: u64,
    pub carrier_rating: f64,
    pub on_time_percentage: f64,
    pub has_lane_history: bool,
    pub score_factors: ScoreFactors,
}
