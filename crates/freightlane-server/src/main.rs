#![forbid(unsafe_code)]

use freightlane_model::ScoringWeights;
use freightlane_server::{build_router, AppState};
use freightlane_store::{DatasetStore, LocalFsStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("FREIGHT_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// `FREIGHT_WEIGHTS` is four comma-separated integer percentages in the
/// order historical,reliability,cost,experience; unset means the defaults.
fn parse_weights() -> Result<ScoringWeights, String> {
    let raw = match env::var("FREIGHT_WEIGHTS") {
        Ok(v) => v,
        Err(_) => return Ok(ScoringWeights::default()),
    };
    let parts: Vec<u8> = raw
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid FREIGHT_WEIGHTS {raw}: {e}"))?;
    let [historical_performance, reliability, cost_competitiveness, experience] = parts[..] else {
        return Err(format!(
            "FREIGHT_WEIGHTS needs four comma-separated values, got: {raw}"
        ));
    };
    let weights = ScoringWeights {
        historical_performance,
        reliability,
        cost_competitiveness,
        experience,
    };
    weights
        .validate()
        .map_err(|e| format!("invalid FREIGHT_WEIGHTS {raw}: {e}"))?;
    Ok(weights)
}

fn build_store() -> Result<Arc<dyn DatasetStore>, String> {
    #[cfg(feature = "backend-http")]
    if let Ok(base_url) = env::var("FREIGHT_HTTP_BASE_URL") {
        let store =
            freightlane_store::HttpStore::new(base_url, env::var("FREIGHT_HTTP_BEARER").ok())
                .map_err(|e| format!("http store init failed: {e}"))?;
        return Ok(Arc::new(store));
    }
    let data_root =
        PathBuf::from(env::var("FREIGHT_DATA_ROOT").unwrap_or_else(|_| "data".to_string()));
    Ok(Arc::new(LocalFsStore::new(data_root)))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let weights = parse_weights()?;
    let store = build_store()?;
    info!("dataset store: {}", store.describe());

    // Startup probe: a failed load is logged but not fatal, since the store
    // is re-read on every request and may recover.
    {
        let probe = Arc::clone(&store);
        match tokio::task::spawn_blocking(move || probe.load_snapshot()).await {
            Ok(Ok(snapshot)) => info!(
                lanes = snapshot.lanes.len(),
                carriers = snapshot.carriers.len(),
                history = snapshot.history.len(),
                "startup dataset probe succeeded"
            ),
            Ok(Err(e)) => warn!("startup dataset probe failed: {e}"),
            Err(e) => warn!("startup dataset probe task failed: {e}"),
        }
    }

    let app = build_router(AppState::with_weights(store, weights));

    let bind_addr = env::var("FREIGHT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("freightlane-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            let drain_ms = env_u64("FREIGHT_SHUTDOWN_DRAIN_MS", 3000);
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
