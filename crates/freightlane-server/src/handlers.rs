// SPDX-License-Identifier: Apache-2.0

use crate::response_contract::{error_response, tag_request};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use freightlane_api::{
    carrier_filter, parse_carriers_params, parse_lane_search_params, parse_recommendations_params,
    ApiError, LaneDetail, ListResponse,
};
use freightlane_engine::{filter_by_min_score, CarrierFilter};
use freightlane_model::{Carrier, CarrierId, Lane, LaneId};
use serde_json::json;
use std::collections::BTreeMap;

/// Liveness only; never touches the dataset store.
pub(crate) async fn health(State(state): State<AppState>) -> Response {
    let request_id = state.next_request_id();
    let response = Json(json!({
        "status": "ok",
        "service": crate::CRATE_NAME,
        "store": state.store_description(),
    }))
    .into_response();
    tag_request(response, &request_id)
}

pub(crate) async fn list_lanes(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let request_id = state.next_request_id();
    let result = list_lanes_inner(&state, &query).await;
    finish(result, &request_id)
}

async fn list_lanes_inner(
    state: &AppState,
    query: &BTreeMap<String, String>,
) -> Result<Response, ApiError> {
    let params = parse_lane_search_params(query)?;
    let engine = state.load_engine().await?;
    let lanes: Vec<Lane> = engine
        .search_lanes(params.q.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(ListResponse::new(lanes)).into_response())
}

pub(crate) async fn lane_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let request_id = state.next_request_id();
    let result = lane_detail_inner(&state, &raw_id).await;
    finish(result, &request_id)
}

async fn lane_detail_inner(state: &AppState, raw_id: &str) -> Result<Response, ApiError> {
    let lane_id =
        LaneId::parse(raw_id).map_err(|_| ApiError::invalid_param("lane_id", raw_id))?;
    let engine = state.load_engine().await?;
    let lane = engine.lane(&lane_id)?.clone();
    let recommendations = engine.recommendations_for_lane(&lane_id, &CarrierFilter::default())?;
    Ok(Json(LaneDetail {
        lane,
        recommendations,
    })
    .into_response())
}

pub(crate) async fn list_carriers(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let request_id = state.next_request_id();
    let result = list_carriers_inner(&state, &query).await;
    finish(result, &request_id)
}

async fn list_carriers_inner(
    state: &AppState,
    query: &BTreeMap<String, String>,
) -> Result<Response, ApiError> {
    let params = parse_carriers_params(query)?;
    let filter = carrier_filter(params.min_rating, params.min_on_time);
    let engine = state.load_engine().await?;
    let mut carriers: Vec<Carrier> = engine
        .carriers()
        .filter(|carrier| filter.matches(carrier))
        .cloned()
        .collect();
    carriers.sort_by(|a, b| {
        b.carrier_rating
            .total_cmp(&a.carrier_rating)
            .then_with(|| a.carrier_id.cmp(&b.carrier_id))
    });
    Ok(Json(ListResponse::new(carriers)).into_response())
}

pub(crate) async fn carrier_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let request_id = state.next_request_id();
    let result = carrier_detail_inner(&state, &raw_id).await;
    finish(result, &request_id)
}

async fn carrier_detail_inner(state: &AppState, raw_id: &str) -> Result<Response, ApiError> {
    let carrier_id =
        CarrierId::parse(raw_id).map_err(|_| ApiError::invalid_param("carrier_id", raw_id))?;
    let engine = state.load_engine().await?;
    let carrier = engine.carrier(&carrier_id)?.clone();
    Ok(Json(carrier).into_response())
}

pub(crate) async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let request_id = state.next_request_id();
    let result = recommendations_inner(&state, &query).await;
    finish(result, &request_id)
}

async fn recommendations_inner(
    state: &AppState,
    query: &BTreeMap<String, String>,
) -> Result<Response, ApiError> {
    let params = parse_recommendations_params(query)?;
    let filter = carrier_filter(params.min_rating, params.min_on_time);
    let engine = state.load_engine().await?;
    let mut recommendations = match &params.lane_id {
        Some(lane_id) => engine.recommendations_for_lane(lane_id, &filter)?,
        None => engine.top_recommendations(params.limit, &filter),
    };
    if let Some(min_score) = params.min_score {
        recommendations = filter_by_min_score(recommendations, min_score);
    }
    Ok(Json(ListResponse::new(recommendations)).into_response())
}

pub(crate) async fn metrics(State(state): State<AppState>) -> Response {
    let request_id = state.next_request_id();
    let result = metrics_inner(&state).await;
    finish(result, &request_id)
}

async fn metrics_inner(state: &AppState) -> Result<Response, ApiError> {
    let engine = state.load_engine().await?;
    Ok(Json(engine.dataset_metrics()).into_response())
}

fn finish(result: Result<Response, ApiError>, request_id: &str) -> Response {
    let response = match result {
        Ok(response) => response,
        Err(err) => error_response(err.with_request_id(request_id)),
    };
    tag_request(response, request_id)
}
