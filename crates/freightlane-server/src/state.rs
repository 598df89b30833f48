// SPDX-License-Identifier: Apache-2.0

use freightlane_api::ApiError;
use freightlane_engine::RecommendationEngine;
use freightlane_model::ScoringWeights;
use freightlane_store::DatasetStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared request state: the dataset store handle, the weights the engine is
/// built with, and a monotonic request-id counter.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DatasetStore>,
    weights: ScoringWeights,
    next_request: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self::with_weights(store, ScoringWeights::default())
    }

    #[must_use]
    pub fn with_weights(store: Arc<dyn DatasetStore>, weights: ScoringWeights) -> Self {
        Self {
            store,
            weights,
            next_request: Arc::new(AtomicU64::new(1)),
        }
    }

    #[must_use]
    pub fn store_description(&self) -> String {
        self.store.describe()
    }

    pub(crate) fn next_request_id(&self) -> String {
        format!(
            "req-{:08x}",
            self.next_request.fetch_add(1, Ordering::Relaxed)
        )
    }

    /// One blocking dataset load per request. A failed load surfaces as an
    /// upstream error, never as an empty engine.
    pub(crate) async fn load_engine(&self) -> Result<RecommendationEngine, ApiError> {
        let store = Arc::clone(&self.store);
        let weights = self.weights;
        let snapshot = tokio::task::spawn_blocking(move || store.load_snapshot())
            .await
            .map_err(|e| ApiError::internal(format!("dataset load task failed: {e}")))??;
        RecommendationEngine::with_weights(
            snapshot.lanes,
            snapshot.carriers,
            snapshot.history,
            weights,
        )
        .map_err(ApiError::from)
    }
}
