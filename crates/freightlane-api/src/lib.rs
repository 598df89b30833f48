#![forbid(unsafe_code)]
//! Wire contracts for the FreightLane HTTP API: error envelope, error-code
//! to status mapping, query-parameter validation, and response shapes.

mod errors;
mod params;
mod responses;

pub use errors::{error_status, ApiError, ApiErrorCode};
pub use params::{
    carrier_filter, parse_carriers_params, parse_lane_search_params,
    parse_recommendations_params, CarriersParams, LaneSearchParams, RecommendationsParams,
    DEFAULT_LIMIT, MAX_LIMIT, MAX_QUERY_BYTES,
};
pub use responses::{LaneDetail, ListResponse};

pub const CRATE_NAME: &str = "freightlane-api";
