#![forbid(unsafe_code)]
//! FreightLane model SSOT.
//!
//! Reference records (lanes, carriers, lane history) are immutable inputs;
//! [`Recommendation`] is derived per request and never stored.

mod carrier;
mod history;
mod ids;
mod lane;
mod recommendation;
mod weights;

pub use carrier::{Carrier, RATING_MAX, RATE_PER_MILE_MAX};
pub use history::LaneHistory;
pub use ids::{CarrierId, LaneId, ParseError, ID_MAX_LEN, NAME_MAX_LEN};
pub use lane::{Lane, DISTANCE_MILES_MAX};
pub use recommendation::{Recommendation, ScoreFactors};
pub use weights::{ScoringWeights, WeightSumError};

pub const CRATE_NAME: &str = "freightlane-model";

/// Bounds violation in a reference record.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    InvalidId(ParseError),
    Empty(&'static str),
    NonPositive(&'static str),
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(e) => write!(f, "{e}"),
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::NonPositive(name) => write!(f, "{name} must be positive"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} outside [{min}, {max}]"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ParseError> for ValidationError {
    fn from(value: ParseError) -> Self {
        Self::InvalidId(value)
    }
}
