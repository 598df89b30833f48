// SPDX-License-Identifier: Apache-2.0

//! Deterministic sub-factor formulas, each bounded to [0, 100].
//!
//! Reliability blends on-time percentage and rating; cost competitiveness
//! compares a carrier's rate against the fleet median; experience saturates
//! at [`EXPERIENCE_FULL_SHIPMENTS`]. Historical performance maps reliability
//! into [HISTORY_FLOOR, 100] for history-backed pairs and [0, HISTORY_FLOOR]
//! otherwise, so history always helps the aggregate and never hurts it.

use freightlane_model::Carrier;

/// Assumed average linehaul speed for delivery-hour estimates.
pub const AVERAGE_SPEED_MPH: f64 = 50.0;

/// Shipment count at which the experience factor saturates at 100.
pub const EXPERIENCE_FULL_SHIPMENTS: u64 = 250;

/// Boundary between the no-history and history-backed score ranges.
pub const HISTORY_FLOOR: f64 = 80.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn clamp_factor(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// `(on_time/100 * 0.6 + rating/5 * 0.4) * 100`.
#[must_use]
pub fn reliability(carrier: &Carrier) -> f64 {
    let blended =
        (carrier.on_time_percentage / 100.0) * 0.6 + (carrier.carrier_rating / 5.0) * 0.4;
    clamp_factor(round2(blended * 100.0))
}

/// Distance from the fleet-median rate, scaled so the median itself scores
/// 100. A non-positive median means there is no basis for comparison.
#[must_use]
pub fn cost_competitiveness(carrier: &Carrier, median_rate: f64) -> f64 {
    if !median_rate.is_finite() || median_rate <= 0.0 {
        return 100.0;
    }
    let deviation = (carrier.rate_per_mile - median_rate).abs() / median_rate;
    clamp_factor(round2((1.0 - deviation).max(0.0) * 100.0))
}

#[must_use]
pub fn experience(carrier: &Carrier) -> f64 {
    let ratio = carrier.total_shipments as f64 / EXPERIENCE_FULL_SHIPMENTS as f64;
    clamp_factor(round2(ratio.min(1.0) * 100.0))
}

/// History-backed pairs land in [HISTORY_FLOOR, 100]; pairs without history
/// land in [0, HISTORY_FLOOR]. The ranges meet only at the floor.
#[must_use]
pub fn historical_performance(reliability_score: f64, has_history: bool) -> f64 {
    let scaled = if has_history {
        HISTORY_FLOOR + reliability_score * (100.0 - HISTORY_FLOOR) / 100.0
    } else {
        reliability_score * HISTORY_FLOOR / 100.0
    };
    clamp_factor(round2(scaled))
}
