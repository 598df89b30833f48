// SPDX-License-Identifier: Apache-2.0

use freightlane_engine::{EngineError, EngineErrorCode};
use freightlane_model::{CarrierId, LaneId};
use freightlane_store::{StoreError, StoreErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    LaneNotFound,
    CarrierNotFound,
    UpstreamUnavailable,
    Internal,
}

/// HTTP status for an error code. Caller errors map to 4xx, upstream data
/// failures to 503, everything else to 500.
#[must_use]
pub const fn error_status(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::InvalidQueryParameter => 400,
        ApiErrorCode::LaneNotFound | ApiErrorCode::CarrierNotFound => 404,
        ApiErrorCode::UpstreamUnavailable => 503,
        ApiErrorCode::Internal => 500,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: "req-unknown".to_string(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"parameter": name, "value": value}),
        )
    }

    #[must_use]
    pub fn lane_not_found(lane_id: &LaneId) -> Self {
        Self::new(
            ApiErrorCode::LaneNotFound,
            "lane not found",
            json!({"lane_id": lane_id.as_str()}),
        )
    }

    #[must_use]
    pub fn carrier_not_found(carrier_id: &CarrierId) -> Self {
        Self::new(
            ApiErrorCode::CarrierNotFound,
            "carrier not found",
            json!({"carrier_id": carrier_id.as_str()}),
        )
    }

    #[must_use]
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::UpstreamUnavailable,
            "reference data unavailable",
            json!({"cause": message.into()}),
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<EngineError> for ApiError {
    fn from(value: EngineError) -> Self {
        match value.code {
            EngineErrorCode::LaneNotFound => Self::new(
                ApiErrorCode::LaneNotFound,
                value.message,
                json!({}),
            ),
            EngineErrorCode::CarrierNotFound => Self::new(
                ApiErrorCode::CarrierNotFound,
                value.message,
                json!({}),
            ),
            _ => Self::internal(value.message),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value.code {
            StoreErrorCode::NotFound | StoreErrorCode::Io | StoreErrorCode::Network => {
                Self::upstream_unavailable(value.message)
            }
            _ => Self::internal(value.message),
        }
    }
}
