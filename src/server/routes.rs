//! API routes for the simulator

use crate::analyzer::{command, output};
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// Request body for `/api/docker-simulate`
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub command: String,
    pub dockerfile: String,
}

/// Response body for `/api/docker-simulate`
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub output: String,
}

/// Request body for `/api/analyze-output`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub output: String,
}

/// Response body for `/api/analyze-output`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// Error payload returned alongside non-2xx statuses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response body for `/api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn simulate_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/docker-simulate", post(simulate_docker))
        .route("/api/analyze-output", post(analyze_output))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn simulate_docker(
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Simulating command: {}", req.command);

    let report = command::simulate(&req.command, &req.dockerfile).map_err(|e| {
        error!("Simulation failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: e.to_string(),
            }),
        )
    })?;

    Ok(Json(SimulateResponse {
        output: report.to_string(),
    }))
}

async fn analyze_output(Json(req): Json<AnalyzeRequest>) -> Json<AnalyzeResponse> {
    Json(AnalyzeResponse {
        analysis: output::analyze(&req.output),
    })
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
