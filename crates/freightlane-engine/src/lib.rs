#![forbid(unsafe_code)]
//! Carrier-to-lane recommendation engine.
//!
//! All scoring is deterministic over carrier and lane attributes; demo-mode
//! jitter is opt-in behind the seedable [`ScoreNoise`] trait. Every query
//! recomputes recommendations from the reference records it holds.

mod engine;
mod engine_error;
mod factors;
mod metrics;
mod noise;
mod query;

pub use engine::{RecommendationEngine, TOP_CARRIER_WINDOW, TOP_LANE_WINDOW};
pub use engine_error::{EngineError, EngineErrorCode};
pub use factors::{
    cost_competitiveness, experience, historical_performance, reliability, AVERAGE_SPEED_MPH,
    EXPERIENCE_FULL_SHIPMENTS, HISTORY_FLOOR,
};
pub use metrics::DatasetMetrics;
pub use noise::{NoNoise, ScoreNoise, SeededJitter};
pub use query::{filter_by_min_score, search_lanes, CarrierFilter};

pub const CRATE_NAME: &str = "freightlane-engine";
