use freightlane_model::{
    Carrier, CarrierId, Lane, LaneId, ParseError, ScoringWeights, ValidationError,
};

fn sample_lane() -> Lane {
    Lane {
        lane_id: LaneId::parse("lane_004").expect("lane id"),
        origin_city: "Houston".to_string(),
        origin_state: "TX".to_string(),
        destination_city: "Atlanta".to_string(),
        destination_state: "GA".to_string(),
        distance_miles: 789.0,
        shipment_count: 412,
    }
}

fn sample_carrier() -> Carrier {
    Carrier {
        carrier_id: CarrierId::parse("carrier_001").expect("carrier id"),
        carrier_name: "Swift Transport".to_string(),
        carrier_rating: 4.8,
        on_time_percentage: 96.0,
        rate_per_mile: 2.85,
        total_shipments: 342,
    }
}

#[test]
fn lane_id_parse_rejects_empty_and_untrimmed() {
    assert_eq!(LaneId::parse(""), Err(ParseError::Empty("lane_id")));
    assert_eq!(
        LaneId::parse(" lane_001"),
        Err(ParseError::Trimmed("lane_id"))
    );
    assert!(LaneId::parse(&"x".repeat(65)).is_err());
    assert!(LaneId::parse("lane_001").is_ok());
}

#[test]
fn lane_validate_rejects_non_positive_distance() {
    let mut lane = sample_lane();
    lane.distance_miles = 0.0;
    assert_eq!(
        lane.validate(),
        Err(ValidationError::NonPositive("distance_miles"))
    );
    lane.distance_miles = -12.0;
    assert!(lane.validate().is_err());
    lane.distance_miles = f64::NAN;
    assert!(lane.validate().is_err());
}

#[test]
fn lane_validate_rejects_blank_endpoint_fields() {
    let mut lane = sample_lane();
    lane.destination_city = "   ".to_string();
    assert_eq!(
        lane.validate(),
        Err(ValidationError::Empty("destination_city"))
    );
}

#[test]
fn lane_validate_accepts_reference_fixture() {
    assert!(sample_lane().validate().is_ok());
}

#[test]
fn carrier_validate_enforces_rating_and_on_time_bounds() {
    let mut carrier = sample_carrier();
    carrier.carrier_rating = 5.1;
    assert!(carrier.validate().is_err());

    let mut carrier = sample_carrier();
    carrier.on_time_percentage = 101.0;
    assert!(carrier.validate().is_err());

    let mut carrier = sample_carrier();
    carrier.rate_per_mile = 0.0;
    assert_eq!(
        carrier.validate(),
        Err(ValidationError::NonPositive("rate_per_mile"))
    );

    assert!(sample_carrier().validate().is_ok());
}

#[test]
fn default_weights_are_forty_thirty_twenty_ten() {
    let weights = ScoringWeights::default();
    assert_eq!(weights.historical_performance, 40);
    assert_eq!(weights.reliability, 30);
    assert_eq!(weights.cost_competitiveness, 20);
    assert_eq!(weights.experience, 10);
    assert!(weights.validate().is_ok());
}

#[test]
fn weights_must_sum_to_one_hundred() {
    let weights = ScoringWeights {
        historical_performance: 50,
        reliability: 30,
        cost_competitiveness: 20,
        experience: 10,
    };
    let err = weights.validate().expect_err("sum is 110");
    assert_eq!(err.0, 110);
}
