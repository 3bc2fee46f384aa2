//! HTTP server exposing sequence and batch computation

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::task;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::models::{HealthResponse, SequenceRequest, WelcomeResponse};
use crate::collatz::{compute_batch, compute_single, BatchRange};
use crate::config::{Config, CorsConfig, LimitsConfig};
use crate::error::Error;

/// API server for sequence endpoints
pub struct ApiServer {
    config: Config,
}

impl ApiServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Start the API server and run until Ctrl+C
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = self.config.listen_address();
        let app = build_router(&self.config)?;

        info!("Starting Syracuse API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Syracuse API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Shared API state
#[derive(Debug, Clone)]
struct ApiState {
    limits: LimitsConfig,
}

/// Build the API router with CORS applied
pub fn build_router(config: &Config) -> Result<Router, Error> {
    let shared_state = Arc::new(ApiState {
        limits: config.limits,
    });

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/sequence", post(get_sequence))
        .route("/batch/{start}/{end}", get(get_batch_sequences))
        .layer(cors_layer(&config.cors)?)
        .with_state(shared_state))
}

/// Any origin when none are configured, otherwise the listed origins.
fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, Error> {
    if cors.allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| Error::Config(format!("invalid CORS origin: {origin}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Runs `compute` and serializes its result on the blocking pool, keeping
/// long trajectories and wide batches off the runtime workers.
async fn run_blocking<T, F>(compute: F) -> Result<Response, ApiError>
where
    T: Serialize,
    F: FnOnce() -> Result<T, Error> + Send + 'static,
{
    let body = task::spawn_blocking(move || -> Result<Vec<u8>, Error> {
        let value = compute()?;
        Ok(serde_json::to_vec(&value)?)
    })
    .await
    .map_err(|e| ApiError::internal(format!("computation task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// API Handlers

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Syracuse Conjecture API",
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "syracuse",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn get_sequence(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<SequenceRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected sequence request body: {}", rejection.body_text());
        ApiError::unprocessable(rejection.body_text())
    })?;

    if let Some(max) = state.limits.max_start_value {
        if request.start_number > 0 && request.start_number as u64 > max {
            warn!("start_number {} exceeds limit {}", request.start_number, max);
            return Err(Error::LimitExceeded(format!(
                "start_number must be at most {max}, got {}",
                request.start_number
            ))
            .into());
        }
    }

    let start_number = request.start_number;
    debug!("Computing sequence for {}", start_number);
    run_blocking(move || compute_single(start_number))
        .await
        .inspect_err(|e| warn!("Failed to compute sequence for {}: {}", start_number, e))
}

async fn get_batch_sequences(
    State(state): State<Arc<ApiState>>,
    params: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((start, end)) = params.map_err(|rejection| {
        warn!("Rejected batch path: {}", rejection.body_text());
        ApiError::unprocessable(rejection.body_text())
    })?;

    let range = BatchRange::new(start, end).inspect_err(|_| {
        warn!("Invalid batch range {}..={}", start, end);
    })?;

    if let Some(max) = state.limits.max_batch_width {
        if range.width() > max {
            warn!("Batch width {} exceeds limit {}", range.width(), max);
            return Err(Error::LimitExceeded(format!(
                "batch width must be at most {max}, got {}",
                range.width()
            ))
            .into());
        }
    }

    if let Some(max) = state.limits.max_start_value {
        if range.end > max {
            return Err(Error::LimitExceeded(format!(
                "end must be at most {max}, got {}",
                range.end
            ))
            .into());
        }
    }

    debug!("Computing batch {}..={}", start, end);
    run_blocking(move || compute_batch(start, end))
        .await
        .inspect_err(|e| warn!("Failed to compute batch {}..={}: {}", start, end, e))
}
