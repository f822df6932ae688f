use std::borrow::Cow;

use axum::{
    Json, Router,
    extract::State,
    http::Uri,
    routing::get,
};
use percent_encoding::percent_decode_str;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::{
    error::{TimeServerError, TimeServerResult},
    models::{HealthResponse, RegionEntry, TimeResponse},
    provider::TimeServer,
    regions,
    utils::{self, GREETING, HEALTHY},
};

/// Build the HTTP router around a time server
///
/// `/health` is matched before the `/{region}` catch-all. The region listing
/// lives under a two-segment path so no region name can reach it.
pub fn create_router(time_server: TimeServer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/_meta/regions", get(list_regions))
        .route("/{region}", get(region_time))
        .layer(TraceLayer::new_for_http())
        .with_state(time_server)
}

async fn home(State(time_server): State<TimeServer>) -> Json<TimeResponse> {
    Json(TimeResponse {
        message: GREETING.to_string(),
        current_time: time_server.local_time(),
    })
}

async fn region_time(
    State(time_server): State<TimeServer>,
    uri: Uri,
) -> TimeServerResult<Json<TimeResponse>> {
    let region = region_from_path(uri.path());
    let current_time = time_server.region_time(&region)?;

    Ok(Json(TimeResponse {
        message: utils::region_greeting(&region),
        current_time,
    }))
}

/// Percent-decode the single segment captured by `/{region}`.
///
/// Invalid UTF-8 is replaced with U+FFFD, so the lookup falls back to UTC.
fn region_from_path(path: &str) -> Cow<'_, str> {
    let segment = path.strip_prefix('/').unwrap_or(path);
    percent_decode_str(segment).decode_utf8_lossy()
}

async fn health(State(time_server): State<TimeServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        timestamp: time_server.local_time(),
    })
}

async fn list_regions() -> Json<Vec<RegionEntry>> {
    let entries = regions::regions()
        .into_iter()
        .map(|(region, timezone)| RegionEntry {
            region: region.to_string(),
            timezone: timezone.to_string(),
        })
        .collect();

    Json(entries)
}

pub async fn run(config: Config) -> TimeServerResult<()> {
    let time_server = TimeServer::new();
    tracing::info!(
        local_timezone = time_server.local_timezone_name(),
        "Detected local timezone"
    );

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| TimeServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, create_router(time_server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Time server stopped");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
