use freightlane_api::{error_status, ApiError, ApiErrorCode};
use freightlane_engine::{EngineError, EngineErrorCode};
use freightlane_model::LaneId;
use freightlane_store::{StoreError, StoreErrorCode};

#[test]
fn status_mapping_separates_caller_and_upstream_errors() {
    assert_eq!(error_status(ApiErrorCode::InvalidQueryParameter), 400);
    assert_eq!(error_status(ApiErrorCode::LaneNotFound), 404);
    assert_eq!(error_status(ApiErrorCode::CarrierNotFound), 404);
    assert_eq!(error_status(ApiErrorCode::UpstreamUnavailable), 503);
    assert_eq!(error_status(ApiErrorCode::Internal), 500);
}

#[test]
fn engine_not_found_maps_to_not_found_codes() {
    let lane_id = LaneId::parse("lane_404").expect("id");
    let api: ApiError = EngineError::lane_not_found(&lane_id).into();
    assert_eq!(api.code, ApiErrorCode::LaneNotFound);
    assert!(api.message.contains("lane_404"));

    let api: ApiError =
        EngineError::new(EngineErrorCode::InvalidInput, "duplicate lane_id").into();
    assert_eq!(api.code, ApiErrorCode::Internal);
}

#[test]
fn store_load_failures_map_to_upstream_unavailable() {
    for code in [
        StoreErrorCode::NotFound,
        StoreErrorCode::Io,
        StoreErrorCode::Network,
    ] {
        let api: ApiError = StoreError::new(code, "lanes.json unreachable").into();
        assert_eq!(api.code, ApiErrorCode::UpstreamUnavailable);
        assert_eq!(error_status(api.code), 503);
    }

    let api: ApiError =
        StoreError::new(StoreErrorCode::Validation, "rating out of range").into();
    assert_eq!(api.code, ApiErrorCode::Internal);
}

#[test]
fn error_envelope_serializes_with_snake_case_codes() {
    let lane_id = LaneId::parse("lane_404").expect("id");
    let err = ApiError::lane_not_found(&lane_id).with_request_id("req-7");
    let encoded = serde_json::to_value(&err).expect("encode error");
    assert_eq!(encoded["code"], "lane_not_found");
    assert_eq!(encoded["request_id"], "req-7");
    assert_eq!(encoded["details"]["lane_id"], "lane_404");
}
