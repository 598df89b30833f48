#![forbid(unsafe_code)]
//! HTTP surface for the recommendation service.
//!
//! Every data route performs one dataset load through the store, builds an
//! engine from the snapshot, and answers from that engine. Responses carry
//! an `x-request-id` header; errors use a uniform `{"error": ...}` envelope.

mod handlers;
mod response_contract;
mod state;
mod trace;

pub use state::AppState;

use axum::routing::get;
use axum::Router;

pub const CRATE_NAME: &str = "freightlane-server";

#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/lanes", get(handlers::list_lanes))
        .route("/v1/lanes/:lane_id", get(handlers::lane_detail))
        .route("/v1/carriers", get(handlers::list_carriers))
        .route("/v1/carriers/:carrier_id", get(handlers::carrier_detail))
        .route("/v1/recommendations", get(handlers::recommendations))
        .route("/v1/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(trace::track_requests))
        .with_state(state)
}
