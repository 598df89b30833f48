// SPDX-License-Identifier: Apache-2.0

use crate::ids::{CarrierId, NAME_MAX_LEN};
use crate::ValidationError;
use serde::{Deserialize, Serialize};

pub const RATING_MAX: f64 = 5.0;
pub const RATE_PER_MILE_MAX: f64 = 100.0;

/// A freight-hauling entity with quality and performance attributes.
/// Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Carrier {
    pub carrier_id: CarrierId,
    pub carrier_name: String,
    pub carrier_rating: f64,
    pub on_time_percentage: f64,
    pub rate_per_mile: f64,
    pub total_shipments: u64,
}

impl Carrier {
    pub fn validate(&self) -> Result<(), ValidationError> {
        CarrierId::parse(self.carrier_id.as_str())?;
        if self.carrier_name.trim().is_empty() {
            return Err(ValidationError::Empty("carrier_name"));
        }
        if self.carrier_name.len() > NAME_MAX_LEN {
            return Err(ValidationError::OutOfRange {
                field: "carrier_name",
                value: self.carrier_name.len() as f64,
                min: 1.0,
                max: NAME_MAX_LEN as f64,
            });
        }
        if !self.carrier_rating.is_finite()
            || self.carrier_rating < 0.0
            || self.carrier_rating > RATING_MAX
        {
            return Err(ValidationError::OutOfRange {
                field: "carrier_rating",
                value: self.carrier_rating,
                min: 0.0,
                max: RATING_MAX,
            });
        }
        if !self.on_time_percentage.is_finite()
            || self.on_time_percentage < 0.0
            || self.on_time_percentage > 100.0
        {
            return Err(ValidationError::OutOfRange {
                field: "on_time_percentage",
                value: self.on_time_percentage,
                min: 0.0,
                max: 100.0,
            });
        }
        if !self.rate_per_mile.is_finite() || self.rate_per_mile <= 0.0 {
            return Err(ValidationError::NonPositive("rate_per_mile"));
        }
        if self.rate_per_mile > RATE_PER_MILE_MAX {
            return Err(ValidationError::OutOfRange {
                field: "rate_per_mile",
                value: self.rate_per_mile,
                min: 0.0,
                max: RATE_PER_MILE_MAX,
            });
        }
        Ok(())
    }
}
