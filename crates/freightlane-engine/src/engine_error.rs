// SPDX-License-Identifier: Apache-2.0

use freightlane_model::{CarrierId, LaneId, ValidationError, WeightSumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineErrorCode {
    LaneNotFound,
    CarrierNotFound,
    InvalidWeights,
    InvalidRecord,
    InvalidInput,
}

impl EngineErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LaneNotFound => "lane_not_found",
            Self::CarrierNotFound => "carrier_not_found",
            Self::InvalidWeights => "invalid_weights",
            Self::InvalidRecord => "invalid_record",
            Self::InvalidInput => "invalid_input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineError {
    pub code: EngineErrorCode,
    pub message: String,
}

impl EngineError {
    #[must_use]
    pub fn new(code: EngineErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn lane_not_found(lane_id: &LaneId) -> Self {
        Self::new(
            EngineErrorCode::LaneNotFound,
            format!("lane not found: {lane_id}"),
        )
    }

    #[must_use]
    pub fn carrier_not_found(carrier_id: &CarrierId) -> Self {
        Self::new(
            EngineErrorCode::CarrierNotFound,
            format!("carrier not found: {carrier_id}"),
        )
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for EngineError {}

impl From<ValidationError> for EngineError {
    fn from(value: ValidationError) -> Self {
        Self::new(EngineErrorCode::InvalidRecord, value.to_string())
    }
}

impl From<WeightSumError> for EngineError {
    fn from(value: WeightSumError) -> Self {
        Self::new(EngineErrorCode::InvalidWeights, value.to_string())
    }
}
