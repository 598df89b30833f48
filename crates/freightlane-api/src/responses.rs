// SPDX-License-Identifier: Apache-2.0

use freightlane_model::{Lane, Recommendation};
use serde::Serialize;

/// Standard list envelope: count always matches `data.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Lane detail: the lane record plus its ranked recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneDetail {
    pub lane: Lane,
    pub recommendations: Vec<Recommendation>,
}
