#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use freightlane_engine::{filter_by_min_score, CarrierFilter, RecommendationEngine};
use freightlane_model::{LaneId, Recommendation, ScoringWeights};
use freightlane_store::{DatasetStore, LocalFsStore, StoreErrorCode};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

const MAX_LIMIT: usize = 50;

#[derive(Parser)]
#[command(name = "freightlane")]
#[command(about = "FreightLane carrier recommendation CLI")]
struct Cli {
    /// Emit machine-readable JSON instead of the table view.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Directory containing lanes.json, carriers.json and
    /// carrier_lane_history.json.
    #[arg(long, global = true, default_value = "data")]
    data_root: PathBuf,
    /// Scoring weights as historical,reliability,cost,experience
    /// integer percentages summing to 100.
    #[arg(long, global = true)]
    weights: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked carrier recommendations, per lane or across the top window.
    Recommend {
        #[arg(long)]
        lane_id: Option<String>,
        #[arg(long, default_value_t = 5)]
        limit: usize,
        #[arg(long)]
        min_score: Option<u8>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        min_on_time: Option<f64>,
    },
    /// Case-insensitive lane search over cities and states.
    SearchLanes { query: Option<String> },
    /// Carrier directory with optional eligibility thresholds.
    Carriers {
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        min_on_time: Option<f64>,
    },
    /// Dataset summary metrics.
    Metrics,
}

/// Process exit statuses: clap itself exits 2 on malformed invocations, so
/// argument-level failures here use the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitStatus {
    Usage = 2,
    BadData = 3,
    StoreFailure = 4,
}

#[derive(Debug)]
struct CliError {
    status: ExitStatus,
    message: String,
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::Usage,
            message: message.into(),
        }
    }

    fn bad_data(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::BadData,
            message: message.into(),
        }
    }

    fn store_failure(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::StoreFailure,
            message: message.into(),
        }
    }
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.message);
            ProcessExitCode::from(err.status as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let weights = parse_weights(cli.weights.as_deref())?;

    match cli.command {
        Commands::Recommend {
            lane_id,
            limit,
            min_score,
            min_rating,
            min_on_time,
        } => {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(CliError::usage(format!(
                    "--limit must be between 1 and {MAX_LIMIT}, got {limit}"
                )));
            }
            if let Some(min_score) = min_score {
                if min_score > 100 {
                    return Err(CliError::usage(format!(
                        "--min-score must be at most 100, got {min_score}"
                    )));
                }
            }
            let filter = carrier_filter(min_rating, min_on_time)?;
            let lane_id = lane_id
                .map(|raw| {
                    LaneId::parse(&raw)
                        .map_err(|e| CliError::usage(format!("invalid --lane-id {raw}: {e}")))
                })
                .transpose()?;
            let engine = load_engine(&cli.data_root, weights)?;
            let mut recommendations = match &lane_id {
                Some(lane_id) => engine
                    .recommendations_for_lane(lane_id, &filter)
                    .map_err(|e| CliError::bad_data(e.message))?,
                None => engine.top_recommendations(limit, &filter),
            };
            if let Some(min_score) = min_score {
                recommendations = filter_by_min_score(recommendations, min_score);
            }
            if cli.json {
                print_json(&json!({
                    "count": recommendations.len(),
                    "data": recommendations,
                }))
            } else {
                print_recommendations(&recommendations);
                Ok(())
            }
        }
        Commands::SearchLanes { query } => {
            let engine = load_engine(&cli.data_root, weights)?;
            let lanes = engine.search_lanes(query.as_deref().unwrap_or(""));
            if cli.json {
                print_json(&json!({"count": lanes.len(), "data": lanes}))
            } else {
                for lane in lanes {
                    println!(
                        "{}  {} {} -> {} {}  {:.0} mi  {} shipments",
                        lane.lane_id,
                        lane.origin_city,
                        lane.origin_state,
                        lane.destination_city,
                        lane.destination_state,
                        lane.distance_miles,
                        lane.shipment_count
                    );
                }
                Ok(())
            }
        }
        Commands::Carriers {
            min_rating,
            min_on_time,
        } => {
            let filter = carrier_filter(min_rating, min_on_time)?;
            let engine = load_engine(&cli.data_root, weights)?;
            let mut carriers: Vec<_> = engine
                .carriers()
                .filter(|carrier| filter.matches(carrier))
                .collect();
            carriers.sort_by(|a, b| {
                b.carrier_rating
                    .total_cmp(&a.carrier_rating)
                    .then_with(|| a.carrier_id.cmp(&b.carrier_id))
            });
            if cli.json {
                print_json(&json!({"count": carriers.len(), "data": carriers}))
            } else {
                for carrier in carriers {
                    println!(
                        "{}  {}  rating {:.1}  on-time {:.1}%  ${:.2}/mi  {} shipments",
                        carrier.carrier_id,
                        carrier.carrier_name,
                        carrier.carrier_rating,
                        carrier.on_time_percentage,
                        carrier.rate_per_mile,
                        carrier.total_shipments
                    );
                }
                Ok(())
            }
        }
        Commands::Metrics => {
            let engine = load_engine(&cli.data_root, weights)?;
            let metrics = engine.dataset_metrics();
            if cli.json {
                print_json(&metrics)
            } else {
                println!("lanes:             {}", metrics.total_lanes);
                println!("carriers:          {}", metrics.total_carriers);
                println!("history records:   {}", metrics.history_records);
                println!("avg rating:        {:.2}", metrics.avg_carrier_rating);
                println!("avg match score:   {:.2}", metrics.avg_match_score);
                println!(
                    "history coverage:  {:.2}%",
                    metrics.history_coverage_percentage
                );
                Ok(())
            }
        }
    }
}

fn parse_weights(raw: Option<&str>) -> Result<ScoringWeights, CliError> {
    let Some(raw) = raw else {
        return Ok(ScoringWeights::default());
    };
    let parts: Vec<u8> = raw
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|e| CliError::usage(format!("invalid --weights {raw}: {e}")))?;
    let [historical_performance, reliability, cost_competitiveness, experience] = parts[..] else {
        return Err(CliError::usage(format!(
            "--weights needs four comma-separated values, got: {raw}"
        )));
    };
    let weights = ScoringWeights {
        historical_performance,
        reliability,
        cost_competitiveness,
        experience,
    };
    weights
        .validate()
        .map_err(|e| CliError::usage(format!("invalid --weights {raw}: {e}")))?;
    Ok(weights)
}

fn carrier_filter(
    min_rating: Option<f64>,
    min_on_time: Option<f64>,
) -> Result<CarrierFilter, CliError> {
    if let Some(min_rating) = min_rating {
        if !min_rating.is_finite() || !(0.0..=5.0).contains(&min_rating) {
            return Err(CliError::usage(format!(
                "--min-rating must be between 0 and 5, got {min_rating}"
            )));
        }
    }
    if let Some(min_on_time) = min_on_time {
        if !min_on_time.is_finite() || !(0.0..=100.0).contains(&min_on_time) {
            return Err(CliError::usage(format!(
                "--min-on-time must be between 0 and 100, got {min_on_time}"
            )));
        }
    }
    Ok(CarrierFilter {
        min_rating,
        min_on_time,
    })
}

fn load_engine(data_root: &PathBuf, weights: ScoringWeights) -> Result<RecommendationEngine, CliError> {
    let store = LocalFsStore::new(data_root.clone());
    let snapshot = store.load_snapshot().map_err(|e| match e.code {
        StoreErrorCode::Validation | StoreErrorCode::Internal => CliError::bad_data(e.to_string()),
        _ => CliError::store_failure(e.to_string()),
    })?;
    RecommendationEngine::with_weights(snapshot.lanes, snapshot.carriers, snapshot.history, weights)
        .map_err(|e| CliError::bad_data(e.message))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::bad_data(format!("encode output failed: {e}")))?;
    println!("{rendered}");
    Ok(())
}

fn print_recommendations(recommendations: &[Recommendation]) {
    for rec in recommendations {
        println!(
            "{}  {}  {}  score {:>3}  ${:.2}/mi  est ${}  {}h  history {}",
            rec.lane_id,
            rec.carrier_id,
            rec.carrier_name,
            rec.match_score,
            rec.estimated_rate,
            rec.estimated_cost,
            rec.estimated_delivery_hours,
            if rec.has_lane_history { "yes" } else { "no" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_flag_parses_and_validates() {
        assert_eq!(
            parse_weights(None).expect("defaults"),
            ScoringWeights::default()
        );
        let custom = parse_weights(Some("25,25,25,25")).expect("valid override");
        assert_eq!(custom.historical_performance, 25);

        for bad in ["40,30,20", "40,30,20,11", "a,b,c,d", ""] {
            let err = parse_weights(Some(bad)).expect_err("must reject");
            assert_eq!(err.status, ExitStatus::Usage);
        }
    }

    #[test]
    fn threshold_flags_are_range_checked() {
        assert!(carrier_filter(Some(4.5), Some(90.0)).is_ok());
        for (rating, on_time) in [
            (Some(5.5), None),
            (Some(-0.1), None),
            (Some(f64::NAN), None),
            (None, Some(100.5)),
        ] {
            let err = carrier_filter(rating, on_time).expect_err("must reject");
            assert_eq!(err.status, ExitStatus::Usage);
        }
    }

    #[test]
    fn store_failures_separate_missing_data_from_bad_data() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("no-such-root");
        let err = load_engine(&missing, ScoringWeights::default()).expect_err("missing root");
        assert_eq!(err.status, ExitStatus::StoreFailure);

        std::fs::write(tmp.path().join("lanes.json"), "not json").expect("write lanes");
        std::fs::write(tmp.path().join("carriers.json"), "[]").expect("write carriers");
        let err =
            load_engine(&tmp.path().to_path_buf(), ScoringWeights::default()).expect_err("bad json");
        assert_eq!(err.status, ExitStatus::BadData);
    }
}
