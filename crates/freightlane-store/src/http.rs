// SPDX-License-Identifier: Apache-2.0

use crate::{
    DatasetSnapshot, DatasetStore, StoreError, StoreErrorCode, CARRIERS_FILE, HISTORY_FILE,
    LANES_FILE,
};
use freightlane_model::LaneHistory;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fetches the dataset files from an HTTP base URL. Reserved for
/// deployments where the datasets are published behind a CDN or an
/// object-store gateway; gated behind the `backend-http` feature.
pub struct HttpStore {
    base_url: String,
    bearer: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpStore {
    pub fn new(base_url: String, bearer: Option<String>) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| StoreError::new(StoreErrorCode::Internal, e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer,
            client,
        })
    }

    fn fetch<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let url = format!("{}/{file}", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .map_err(|e| StoreError::new(StoreErrorCode::Network, format!("{url}: {e}")))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::new(
                StoreErrorCode::Network,
                format!("{url}: upstream returned {}", response.status()),
            ));
        }
        let body = response
            .text()
            .map_err(|e| StoreError::new(StoreErrorCode::Network, format!("{url}: {e}")))?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| StoreError::new(StoreErrorCode::Validation, format!("{url}: {e}")))
    }

    fn fetch_required<T: DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        self.fetch(file)?.ok_or_else(|| {
            StoreError::new(
                StoreErrorCode::NotFound,
                format!("{}/{file}: not found", self.base_url),
            )
        })
    }
}

impl DatasetStore for HttpStore {
    fn load_snapshot(&self) -> Result<DatasetSnapshot, StoreError> {
        let history: Vec<LaneHistory> = self.fetch(HISTORY_FILE)?.unwrap_or_default();
        let snapshot = DatasetSnapshot {
            lanes: self.fetch_required(LANES_FILE)?,
            carriers: self.fetch_required(CARRIERS_FILE)?,
            history,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}
