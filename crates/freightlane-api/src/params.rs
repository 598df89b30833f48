// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use freightlane_engine::CarrierFilter;
use freightlane_model::LaneId;
use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 50;
pub const MAX_QUERY_BYTES: usize = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsParams {
    pub lane_id: Option<LaneId>,
    pub limit: usize,
    pub min_score: Option<u8>,
    pub min_rating: Option<f64>,
    pub min_on_time: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarriersParams {
    pub min_rating: Option<f64>,
    pub min_on_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaneSearchParams {
    pub q: Option<String>,
}

pub fn parse_recommendations_params(
    query: &BTreeMap<String, String>,
) -> Result<RecommendationsParams, ApiError> {
    let lane_id = match query.get("lane_id") {
        Some(raw) => {
            Some(LaneId::parse(raw).map_err(|_| ApiError::invalid_param("lane_id", raw))?)
        }
        None => None,
    };

    let limit = if let Some(raw) = query.get("limit") {
        let value = raw
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_param("limit", raw))?;
        if value == 0 || value > MAX_LIMIT {
            return Err(ApiError::invalid_param("limit", raw));
        }
        value
    } else {
        DEFAULT_LIMIT
    };

    let min_score = if let Some(raw) = query.get("min_score") {
        let value = raw
            .parse::<u8>()
            .map_err(|_| ApiError::invalid_param("min_score", raw))?;
        if value > 100 {
            return Err(ApiError::invalid_param("min_score", raw));
        }
        Some(value)
    } else {
        None
    };

    Ok(RecommendationsParams {
        lane_id,
        limit,
        min_score,
        min_rating: parse_bounded_f64(query, "min_rating", 0.0, 5.0)?,
        min_on_time: parse_bounded_f64(query, "min_on_time", 0.0, 100.0)?,
    })
}

pub fn parse_carriers_params(
    query: &BTreeMap<String, String>,
) -> Result<CarriersParams, ApiError> {
    Ok(CarriersParams {
        min_rating: parse_bounded_f64(query, "min_rating", 0.0, 5.0)?,
        min_on_time: parse_bounded_f64(query, "min_on_time", 0.0, 100.0)?,
    })
}

pub fn parse_lane_search_params(
    query: &BTreeMap<String, String>,
) -> Result<LaneSearchParams, ApiError> {
    let q = match query.get("q") {
        Some(raw) => {
            if raw.len() > MAX_QUERY_BYTES {
                return Err(ApiError::invalid_param("q", raw));
            }
            Some(raw.clone())
        }
        None => None,
    };
    Ok(LaneSearchParams { q })
}

/// Engine-level eligibility filter from validated threshold params.
#[must_use]
pub fn carrier_filter(min_rating: Option<f64>, min_on_time: Option<f64>) -> CarrierFilter {
    CarrierFilter {
        min_rating,
        min_on_time,
    }
}

fn parse_bounded_f64(
    query: &BTreeMap<String, String>,
    name: &'static str,
    min: f64,
    max: f64,
) -> Result<Option<f64>, ApiError> {
    let Some(raw) = query.get(name) else {
        return Ok(None);
    };
    let value = raw
        .parse::<f64>()
        .map_err(|_| ApiError::invalid_param(name, raw))?;
    if !value.is_finite() || value < min || value > max {
        return Err(ApiError::invalid_param(name, raw));
    }
    Ok(Some(value))
}
