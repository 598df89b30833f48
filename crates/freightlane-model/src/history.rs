// SPDX-License-Identifier: Apache-2.0

use crate::ids::{CarrierId, LaneId};
use serde::{Deserialize, Serialize};

/// A fact that a carrier has previously served a lane. Presence is the
/// scoring input; the record carries no numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(deny_unknown_fields)]
pub struct LaneHistory {
    pub carrier_id: CarrierId,
    pub lane_id: LaneId,
}
