// SPDX-License-Identifier: Apache-2.0

use crate::ids::{LaneId, NAME_MAX_LEN};
use crate::ValidationError;
use serde::{Deserialize, Serialize};

pub const DISTANCE_MILES_MAX: f64 = 10_000.0;

/// A directional origin-destination shipping route. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lane {
    pub lane_id: LaneId,
    pub origin_city: String,
    pub origin_state: String,
    pub destination_city: String,
    pub destination_state: String,
    pub distance_miles: f64,
    pub shipment_count: u64,
}

impl Lane {
    pub fn validate(&self) -> Result<(), ValidationError> {
        LaneId::parse(self.lane_id.as_str())?;
        for (field, value) in [
            ("origin_city", &self.origin_city),
            ("origin_state", &self.origin_state),
            ("destination_city", &self.destination_city),
            ("destination_state", &self.destination_state),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Empty(field));
            }
            if value.len() > NAME_MAX_LEN {
                return Err(ValidationError::OutOfRange {
                    field,
                    value: value.len() as f64,
                    min: 1.0,
                    max: NAME_MAX_LEN as f64,
                });
            }
        }
        if !self.distance_miles.is_finite() || self.distance_miles <= 0.0 {
            return Err(ValidationError::NonPositive("distance_miles"));
        }
        if self.distance_miles > DISTANCE_MILES_MAX {
            return Err(ValidationError::OutOfRange {
                field: "distance_miles",
                value: self.distance_miles,
                min: 0.0,
                max: DISTANCE_MILES_MAX,
            });
        }
        Ok(())
    }
}
