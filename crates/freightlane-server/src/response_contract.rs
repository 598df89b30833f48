// SPDX-License-Identifier: Apache-2.0

use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use freightlane_api::{error_status, ApiError, ApiErrorCode};
use serde_json::json;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Error envelope: `{"error": {code, message, details, request_id}}` with the
/// status derived from the error code. 503s carry a Retry-After hint.
pub(crate) fn error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(error_status(err.code)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let retryable = err.code == ApiErrorCode::UpstreamUnavailable;
    let mut response = (status, Json(json!({ "error": err }))).into_response();
    if retryable {
        response
            .headers_mut()
            .insert(RETRY_AFTER, HeaderValue::from_static("3"));
    }
    response
}

pub(crate) fn tag_request(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
