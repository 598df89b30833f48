use freightlane_model::{Carrier, CarrierId, Lane, LaneId};
use proptest::prelude::*;

fn id_chars() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,32}"
}

proptest! {
    #[test]
    fn in_range_carriers_always_validate(
        id in id_chars(),
        rating in 0.0f64..=5.0,
        on_time in 0.0f64..=100.0,
        rate in 0.01f64..=100.0,
        shipments in 0u64..100_000,
    ) {
        let carrier = Carrier {
            carrier_id: CarrierId::parse(&id).expect("generated id is valid"),
            carrier_name: "Generated Carrier".to_string(),
            carrier_rating: rating,
            on_time_percentage: on_time,
            rate_per_mile: rate,
            total_shipments: shipments,
        };
        prop_assert!(carrier.validate().is_ok());
    }

    #[test]
    fn in_range_lanes_always_validate(
        id in id_chars(),
        distance in 0.01f64..=10_000.0,
        shipments in 0u64..100_000,
    ) {
        let lane = Lane {
            lane_id: LaneId::parse(&id).expect("generated id is valid"),
            origin_city: "Origin".to_string(),
            origin_state: "OS".to_string(),
            destination_city: "Destination".to_string(),
            destination_state: "DS".to_string(),
            distance_miles: distance,
            shipment_count: shipments,
        };
        prop_assert!(lane.validate().is_ok());
    }

    #[test]
    fn untrimmed_ids_never_parse(inner in "[a-z0-9_]{1,16}") {
        let leading = format!(" {inner}");
        let trailing = format!("{inner} ");
        prop_assert!(LaneId::parse(&leading).is_err());
        prop_assert!(CarrierId::parse(&trailing).is_err());
    }
}
