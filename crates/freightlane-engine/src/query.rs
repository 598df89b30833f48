// SPDX-License-Identifier: Apache-2.0

use freightlane_model::{Carrier, Lane, Recommendation};

/// Carrier eligibility thresholds applied before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarrierFilter {
    pub min_rating: Option<f64>,
    pub min_on_time: Option<f64>,
}

impl CarrierFilter {
    #[must_use]
    pub fn matches(&self, carrier: &Carrier) -> bool {
        if let Some(min_rating) = self.min_rating {
            if carrier.carrier_rating < min_rating {
                return false;
            }
        }
        if let Some(min_on_time) = self.min_on_time {
            if carrier.on_time_percentage < min_on_time {
                return false;
            }
        }
        true
    }
}

/// Retains entries with `match_score >= min_score`, preserving input order.
#[must_use]
pub fn filter_by_min_score(
    mut recommendations: Vec<Recommendation>,
    min_score: u8,
) -> Vec<Recommendation> {
    recommendations.retain(|rec| rec.match_score >= min_score);
    recommendations
}

/// Case-insensitive substring match against origin/destination city and
/// state. An empty query matches everything.
#[must_use]
pub fn search_lanes<'a>(lanes: &'a [Lane], query: &str) -> Vec<&'a Lane> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return lanes.iter().collect();
    }
    lanes.iter().filter(|lane| lane_matches(lane, &needle)).collect()
}

/// `needle` must already be lowercased.
pub(crate) fn lane_matches(lane: &Lane, needle: &str) -> bool {
    [
        &lane.origin_city,
        &lane.destination_city,
        &lane.origin_state,
        &lane.destination_state,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
