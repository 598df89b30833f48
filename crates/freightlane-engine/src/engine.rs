// SPDX-License-Identifier: Apache-2.0

use crate::engine_error::{EngineError, EngineErrorCode};
use crate::factors::{self, clamp_factor, round2, AVERAGE_SPEED_MPH};
use crate::metrics::DatasetMetrics;
use crate::noise::{NoNoise, ScoreNoise};
use crate::query::{lane_matches, CarrierFilter};
use freightlane_model::{
    Carrier, CarrierId, Lane, LaneHistory, LaneId, Recommendation, ScoreFactors, ScoringWeights,
};
use std::collections::{BTreeMap, BTreeSet};

/// Lanes considered by the default cross-lane top-N window, in id order.
pub const TOP_LANE_WINDOW: usize = 8;

/// Carriers considered per lane inside that window, in id order.
pub const TOP_CARRIER_WINDOW: usize = 3;

/// Scores and ranks carriers against lanes.
///
/// Holds validated, immutable reference data; every query recomputes its
/// recommendations, so results never alias shared mutable state.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    lanes: BTreeMap<LaneId, Lane>,
    carriers: BTreeMap<CarrierId, Carrier>,
    history: BTreeSet<(CarrierId, LaneId)>,
    weights: ScoringWeights,
    median_rate: f64,
}

impl RecommendationEngine {
    pub fn new(
        lanes: Vec<Lane>,
        carriers: Vec<Carrier>,
        history: Vec<LaneHistory>,
    ) -> Result<Self, EngineError> {
        Self::with_weights(lanes, carriers, history, ScoringWeights::default())
    }

    pub fn with_weights(
        lanes: Vec<Lane>,
        carriers: Vec<Carrier>,
        history: Vec<LaneHistory>,
        weights: ScoringWeights,
    ) -> Result<Self, EngineError> {
        weights.validate()?;

        let mut lane_map = BTreeMap::new();
        for lane in lanes {
            lane.validate()?;
            let id = lane.lane_id.clone();
            if lane_map.insert(id.clone(), lane).is_some() {
                return Err(EngineError::new(
                    EngineErrorCode::InvalidInput,
                    format!("duplicate lane_id: {id}"),
                ));
            }
        }

        let mut carrier_map = BTreeMap::new();
        for carrier in carriers {
            carrier.validate()?;
            let id = carrier.carrier_id.clone();
            if carrier_map.insert(id.clone(), carrier).is_some() {
                return Err(EngineError::new(
                    EngineErrorCode::InvalidInput,
                    format!("duplicate carrier_id: {id}"),
                ));
            }
        }

        let mut history_set = BTreeSet::new();
        for pair in history {
            if !carrier_map.contains_key(&pair.carrier_id) {
                return Err(EngineError::new(
                    EngineErrorCode::InvalidInput,
                    format!("history references unknown carrier: {}", pair.carrier_id),
                ));
            }
            if !lane_map.contains_key(&pair.lane_id) {
                return Err(EngineError::new(
                    EngineErrorCode::InvalidInput,
                    format!("history references unknown lane: {}", pair.lane_id),
                ));
            }
            history_set.insert((pair.carrier_id, pair.lane_id));
        }

        let median_rate = median_rate_per_mile(&carrier_map);
        Ok(Self {
            lanes: lane_map,
            carriers: carrier_map,
            history: history_set,
            weights,
            median_rate,
        })
    }

    #[must_use]
    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    #[must_use]
    pub fn median_rate(&self) -> f64 {
        self.median_rate
    }

    pub fn lane(&self, lane_id: &LaneId) -> Result<&Lane, EngineError> {
        self.lanes
            .get(lane_id)
            .ok_or_else(|| EngineError::lane_not_found(lane_id))
    }

    pub fn carrier(&self, carrier_id: &CarrierId) -> Result<&Carrier, EngineError> {
        self.carriers
            .get(carrier_id)
            .ok_or_else(|| EngineError::carrier_not_found(carrier_id))
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.values()
    }

    pub fn carriers(&self) -> impl Iterator<Item = &Carrier> {
        self.carriers.values()
    }

    #[must_use]
    pub fn has_history(&self, carrier_id: &CarrierId, lane_id: &LaneId) -> bool {
        self.history
            .contains(&(carrier_id.clone(), lane_id.clone()))
    }

    /// Pure scoring of one (lane, carrier) pair. No side effects.
    #[must_use]
    pub fn score(&self, lane: &Lane, carrier: &Carrier, has_history: bool) -> Recommendation {
        self.score_with_noise(lane, carrier, has_history, &mut NoNoise)
    }

    /// Scoring with an injected noise source for simulation/demo runs.
    /// With [`NoNoise`] this is fully deterministic.
    pub fn score_with_noise(
        &self,
        lane: &Lane,
        carrier: &Carrier,
        has_history: bool,
        noise: &mut dyn ScoreNoise,
    ) -> Recommendation {
        let reliability_base = factors::reliability(carrier);
        let historical =
            perturb(factors::historical_performance(reliability_base, has_history), noise);
        let reliability = perturb(reliability_base, noise);
        let cost = perturb(factors::cost_competitiveness(carrier, self.median_rate), noise);
        let experience = perturb(factors::experience(carrier), noise);

        let weighted = (historical * f64::from(self.weights.historical_performance)
            + reliability * f64::from(self.weights.reliability)
            + cost * f64::from(self.weights.cost_competitiveness)
            + experience * f64::from(self.weights.experience))
            / 100.0;
        let match_score = weighted.round().clamp(0.0, 100.0) as u8;

        Recommendation {
            lane_id: lane.lane_id.clone(),
            origin_city: lane.origin_city.clone(),
            destination_city: lane.destination_city.clone(),
            carrier_id: carrier.carrier_id.clone(),
            carrier_name: carrier.carrier_name.clone(),
            match_score,
            estimated_rate: round2(carrier.rate_per_mile),
            estimated_cost: (lane.distance_miles * carrier.rate_per_mile).floor() as u64,
            estimated_delivery_hours: (lane.distance_miles / AVERAGE_SPEED_MPH).floor() as u64,
            carrier_rating: carrier.carrier_rating,
            on_time_percentage: carrier.on_time_percentage,
            has_lane_history: has_history,
            score_factors: ScoreFactors {
                historical_performance: historical,
                reliability,
                cost_competitiveness: cost,
                experience,
            },
        }
    }

    /// Ranked recommendations for one lane over its eligible carriers.
    ///
    /// An unknown lane id is an error, distinct from a lane with zero
    /// eligible carriers (which yields `Ok` with an empty vec).
    pub fn recommendations_for_lane(
        &self,
        lane_id: &LaneId,
        filter: &CarrierFilter,
    ) -> Result<Vec<Recommendation>, EngineError> {
        let lane = self.lane(lane_id)?;
        let mut recommendations: Vec<Recommendation> = self
            .carriers
            .values()
            .filter(|carrier| filter.matches(carrier))
            .map(|carrier| {
                let has_history = self.has_history(&carrier.carrier_id, lane_id);
                self.score(lane, carrier, has_history)
            })
            .collect();
        sort_ranked(&mut recommendations);
        Ok(recommendations)
    }

    /// Top recommendations across the bounded default window of lanes and
    /// carriers. `limit == 0` yields an empty vec; an oversize limit yields
    /// every candidate without padding.
    #[must_use]
    pub fn top_recommendations(&self, limit: usize, filter: &CarrierFilter) -> Vec<Recommendation> {
        if limit == 0 {
            return Vec::new();
        }
        let mut recommendations = self.window_recommendations(filter);
        recommendations.truncate(limit);
        recommendations
    }

    #[must_use]
    pub fn search_lanes(&self, query: &str) -> Vec<&Lane> {
        let needle = query.trim().to_lowercase();
        self.lanes
            .values()
            .filter(|lane| needle.is_empty() || lane_matches(lane, &needle))
            .collect()
    }

    #[must_use]
    pub fn dataset_metrics(&self) -> DatasetMetrics {
        let window = self.window_recommendations(&CarrierFilter::default());
        let with_history = window.iter().filter(|rec| rec.has_lane_history).count();
        let avg_match_score = if window.is_empty() {
            0.0
        } else {
            round2(
                window.iter().map(|rec| f64::from(rec.match_score)).sum::<f64>()
                    / window.len() as f64,
            )
        };
        let history_coverage_percentage = if window.is_empty() {
            0.0
        } else {
            round2(with_history as f64 / window.len() as f64 * 100.0)
        };
        let avg_carrier_rating = if self.carriers.is_empty() {
            0.0
        } else {
            round2(
                self.carriers.values().map(|c| c.carrier_rating).sum::<f64>()
                    / self.carriers.len() as f64,
            )
        };
        DatasetMetrics {
            total_lanes: self.lanes.len(),
            total_carriers: self.carriers.len(),
            history_records: self.history.len(),
            avg_carrier_rating,
            avg_match_score,
            recommendations_with_history: with_history,
            history_coverage_percentage,
            scoring_weights: self.weights,
        }
    }

    fn window_recommendations(&self, filter: &CarrierFilter) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .lanes
            .values()
            .take(TOP_LANE_WINDOW)
            .flat_map(|lane| {
                self.carriers
                    .values()
                    .take(TOP_CARRIER_WINDOW)
                    .filter(|carrier| filter.matches(carrier))
                    .map(|carrier| {
                        let has_history = self.has_history(&carrier.carrier_id, &lane.lane_id);
                        self.score(lane, carrier, has_history)
                    })
            })
            .collect();
        sort_ranked(&mut recommendations);
        recommendations
    }
}

fn perturb(factor: f64, noise: &mut dyn ScoreNoise) -> f64 {
    let offset = noise.sample();
    if offset == 0.0 {
        factor
    } else {
        clamp_factor(round2(factor + offset))
    }
}

/// match_score descending, carrier_id ascending on ties: a stable total
/// order, so equal-score rankings are reproducible.
fn sort_ranked(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.carrier_id.cmp(&b.carrier_id))
            .then_with(|| a.lane_id.cmp(&b.lane_id))
    });
}

fn median_rate_per_mile(carriers: &BTreeMap<CarrierId, Carrier>) -> f64 {
    let mut rates: Vec<f64> = carriers.values().map(|c| c.rate_per_mile).collect();
    if rates.is_empty() {
        return 0.0;
    }
    rates.sort_by(f64::total_cmp);
    let mid = rates.len() / 2;
    if rates.len() % 2 == 1 {
        rates[mid]
    } else {
        (rates[mid - 1] + rates[mid]) / 2.0
    }
}
