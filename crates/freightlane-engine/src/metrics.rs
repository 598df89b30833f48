// SPDX-License-Identifier: Apache-2.0

use freightlane_model::ScoringWeights;
use serde::Serialize;

/// Aggregate view of the loaded datasets and the scoring configuration,
/// computed over the default top-recommendation window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetMetrics {
    pub total_lanes: usize,
    pub total_carriers: usize,
    pub history_records: usize,
    pub avg_carrier_rating: f64,
    pub avg_match_score: f64,
    pub recommendations_with_history: usize,
    pub history_coverage_percentage: f64,
    pub scoring_weights: ScoringWeights,
}
