use freightlane_store::{DatasetStore, LocalFsStore, StoreErrorCode};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const LANES: &str = r#"[
    {
        "lane_id": "lane_001",
        "origin_city": "Los Angeles",
        "origin_state": "CA",
        "destination_city": "Chicago",
        "destination_state": "IL",
        "distance_miles": 2015,
        "shipment_count": 342
    },
    {
        "lane_id": "lane_004",
        "origin_city": "Houston",
        "origin_state": "TX",
        "destination_city": "Atlanta",
        "destination_state": "GA",
        "distance_miles": 789,
        "shipment_count": 412
    }
]"#;

const CARRIERS: &str = r#"[
    {
        "carrier_id": "carrier_001",
        "carrier_name": "Swift Transport",
        "carrier_rating": 4.8,
        "on_time_percentage": 96,
        "rate_per_mile": 2.85,
        "total_shipments": 342
    }
]"#;

const HISTORY: &str = r#"[
    {"carrier_id": "carrier_001", "lane_id": "lane_004"}
]"#;

fn write_datasets(root: &Path) {
    fs::write(root.join("lanes.json"), LANES).expect("write lanes");
    fs::write(root.join("carriers.json"), CARRIERS).expect("write carriers");
    fs::write(root.join("carrier_lane_history.json"), HISTORY).expect("write history");
}

#[test]
fn loads_and_validates_a_complete_data_root() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let snapshot = store.load_snapshot().expect("load snapshot");
    assert_eq!(snapshot.lanes.len(), 2);
    assert_eq!(snapshot.carriers.len(), 1);
    assert_eq!(snapshot.history.len(), 1);
}

#[test]
fn missing_history_file_means_no_pairings() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());
    fs::remove_file(dir.path().join("carrier_lane_history.json")).expect("remove history");

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let snapshot = store.load_snapshot().expect("load snapshot");
    assert!(snapshot.history.is_empty());
}

#[test]
fn missing_required_file_is_not_found_never_empty() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());
    fs::remove_file(dir.path().join("carriers.json")).expect("remove carriers");

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let err = store.load_snapshot().expect_err("carriers.json is required");
    assert_eq!(err.code, StoreErrorCode::NotFound);
}

#[test]
fn malformed_json_is_a_validation_error() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());
    fs::write(dir.path().join("lanes.json"), "{not json").expect("corrupt lanes");

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let err = store.load_snapshot().expect_err("malformed lanes.json");
    assert_eq!(err.code, StoreErrorCode::Validation);
}

#[test]
fn out_of_range_records_fail_strict_validation() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());
    let bad = CARRIERS.replace("4.8", "8.4");
    fs::write(dir.path().join("carriers.json"), bad).expect("write bad carriers");

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let err = store.load_snapshot().expect_err("rating above 5.0");
    assert_eq!(err.code, StoreErrorCode::Validation);
}

#[test]
fn orphan_history_pairs_fail_strict_validation() {
    let dir = tempdir().expect("tempdir");
    write_datasets(dir.path());
    fs::write(
        dir.path().join("carrier_lane_history.json"),
        r#"[{"carrier_id": "carrier_404", "lane_id": "lane_001"}]"#,
    )
    .expect("write orphan history");

    let store = LocalFsStore::new(dir.path().to_path_buf());
    let err = store.load_snapshot().expect_err("unknown carrier in history");
    assert_eq!(err.code, StoreErrorCode::Validation);
    assert!(err.message.contains("carrier_404"));
}

#[test]
fn describe_names_the_backend_and_root() {
    let store = LocalFsStore::new("/data/freightlane".into());
    assert_eq!(store.describe(), "local:/data/freightlane");
}
