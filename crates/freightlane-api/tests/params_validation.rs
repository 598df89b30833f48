use freightlane_api::{
    parse_carriers_params, parse_lane_search_params, parse_recommendations_params, ApiErrorCode,
    DEFAULT_LIMIT, MAX_LIMIT, MAX_QUERY_BYTES,
};
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn recommendations_defaults_apply_when_query_is_empty() {
    let params = parse_recommendations_params(&query(&[])).expect("empty query is valid");
    assert_eq!(params.lane_id, None);
    assert_eq!(params.limit, DEFAULT_LIMIT);
    assert_eq!(params.min_score, None);
    assert_eq!(params.min_rating, None);
    assert_eq!(params.min_on_time, None);
}

#[test]
fn limit_must_be_a_positive_bounded_integer() {
    for bad in ["0", "-3", "abc", "4.5", ""] {
        let err = parse_recommendations_params(&query(&[("limit", bad)]))
            .expect_err("limit must be rejected");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    }
    let over = (MAX_LIMIT + 1).to_string();
    assert!(parse_recommendations_params(&query(&[("limit", &over)])).is_err());

    let params =
        parse_recommendations_params(&query(&[("limit", "10")])).expect("valid limit");
    assert_eq!(params.limit, 10);
}

#[test]
fn min_score_is_bounded_to_one_hundred() {
    assert!(parse_recommendations_params(&query(&[("min_score", "100")])).is_ok());
    assert!(parse_recommendations_params(&query(&[("min_score", "101")])).is_err());
    assert!(parse_recommendations_params(&query(&[("min_score", "-1")])).is_err());
    assert!(parse_recommendations_params(&query(&[("min_score", "x")])).is_err());
}

#[test]
fn lane_id_is_validated_as_an_identifier() {
    let params = parse_recommendations_params(&query(&[("lane_id", "lane_004")]))
        .expect("valid lane id");
    assert_eq!(params.lane_id.expect("present").as_str(), "lane_004");

    let err = parse_recommendations_params(&query(&[("lane_id", " lane_004")]))
        .expect_err("untrimmed id");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
}

#[test]
fn carrier_thresholds_are_range_checked() {
    let params = parse_carriers_params(&query(&[("min_rating", "4.5"), ("min_on_time", "90")]))
        .expect("valid thresholds");
    assert_eq!(params.min_rating, Some(4.5));
    assert_eq!(params.min_on_time, Some(90.0));

    for (name, bad) in [
        ("min_rating", "5.5"),
        ("min_rating", "-0.1"),
        ("min_rating", "NaN"),
        ("min_on_time", "100.5"),
        ("min_on_time", "abc"),
    ] {
        let err =
            parse_carriers_params(&query(&[(name, bad)])).expect_err("threshold must be rejected");
        assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    }
}

#[test]
fn lane_search_query_is_length_bounded() {
    let params = parse_lane_search_params(&query(&[("q", "chicago")])).expect("valid query");
    assert_eq!(params.q.as_deref(), Some("chicago"));

    let long = "x".repeat(MAX_QUERY_BYTES + 1);
    let err = parse_lane_search_params(&query(&[("q", &long)])).expect_err("oversize query");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);

    assert_eq!(
        parse_lane_search_params(&query(&[])).expect("no query").q,
        None
    );
}
