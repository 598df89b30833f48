#![forbid(unsafe_code)]
//! Read-only retrieval of the reference datasets.
//!
//! A [`DatasetStore`] performs exactly one load per call with no retries
//! and no caching fallback; a failed load surfaces as a [`StoreError`] so
//! the caller can never mistake it for an empty dataset.

use freightlane_model::{Carrier, CarrierId, Lane, LaneHistory, LaneId};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[cfg(feature = "backend-http")]
mod http;
#[cfg(feature = "backend-http")]
pub use http::HttpStore;

pub const CRATE_NAME: &str = "freightlane-store";

pub const LANES_FILE: &str = "lanes.json";
pub const CARRIERS_FILE: &str = "carriers.json";
pub const HISTORY_FILE: &str = "carrier_lane_history.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Io,
    Network,
    Validation,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Io => "io_error",
            Self::Network => "network_error",
            Self::Validation => "validation_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// One load of the three reference datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSnapshot {
    pub lanes: Vec<Lane>,
    pub carriers: Vec<Carrier>,
    pub history: Vec<LaneHistory>,
}

impl DatasetSnapshot {
    /// Strict validation: record bounds, unique ids, and history pairs
    /// referencing known records.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut lane_ids: BTreeSet<&LaneId> = BTreeSet::new();
        for lane in &self.lanes {
            lane.validate()
                .map_err(|e| StoreError::new(StoreErrorCode::Validation, e.to_string()))?;
            if !lane_ids.insert(&lane.lane_id) {
                return Err(StoreError::new(
                    StoreErrorCode::Validation,
                    format!("duplicate lane_id: {}", lane.lane_id),
                ));
            }
        }
        let mut carrier_ids: BTreeSet<&CarrierId> = BTreeSet::new();
        for carrier in &self.carriers {
            carrier
                .validate()
                .map_err(|e| StoreError::new(StoreErrorCode::Validation, e.to_string()))?;
            if !carrier_ids.insert(&carrier.carrier_id) {
                return Err(StoreError::new(
                    StoreErrorCode::Validation,
                    format!("duplicate carrier_id: {}", carrier.carrier_id),
                ));
            }
        }
        for pair in &self.history {
            if !carrier_ids.contains(&pair.carrier_id) {
                return Err(StoreError::new(
                    StoreErrorCode::Validation,
                    format!("history references unknown carrier: {}", pair.carrier_id),
                ));
            }
            if !lane_ids.contains(&pair.lane_id) {
                return Err(StoreError::new(
                    StoreErrorCode::Validation,
                    format!("history references unknown lane: {}", pair.lane_id),
                ));
            }
        }
        Ok(())
    }
}

/// Loader collaborator for the engine. Implementations are blocking; the
/// server wraps calls in its own blocking-task facility.
pub trait DatasetStore: Send + Sync {
    fn load_snapshot(&self) -> Result<DatasetSnapshot, StoreError>;

    /// Human-readable backend description for logs.
    fn describe(&self) -> String;
}

/// Reads the three dataset files from a local directory.
///
/// `lanes.json` and `carriers.json` are required; a missing history file
/// means no recorded pairings rather than an error.
pub struct LocalFsStore {
    root: PathBuf,
}

impl LocalFsStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn read_required<T: DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        let path = self.root.join(file);
        let raw = fs::read_to_string(&path).map_err(|e| {
            let code = if e.kind() == ErrorKind::NotFound {
                StoreErrorCode::NotFound
            } else {
                StoreErrorCode::Io
            };
            StoreError::new(code, format!("{}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Validation,
                format!("{}: {e}", path.display()),
            )
        })
    }

    fn read_history(&self) -> Result<Vec<LaneHistory>, StoreError> {
        let path = self.root.join(HISTORY_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Validation,
                    format!("{}: {e}", path.display()),
                )
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::new(
                StoreErrorCode::Io,
                format!("{}: {e}", path.display()),
            )),
        }
    }
}

impl DatasetStore for LocalFsStore {
    fn load_snapshot(&self) -> Result<DatasetSnapshot, StoreError> {
        let snapshot = DatasetSnapshot {
            lanes: self.read_required(LANES_FILE)?,
            carriers: self.read_required(CARRIERS_FILE)?,
            history: self.read_history()?,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("local:{}", self.root.display())
    }
}
