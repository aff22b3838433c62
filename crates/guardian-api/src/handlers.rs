//! Route handler functions for all API endpoints.
//!
//! Successful replies are wrapped as `{"status":"success","data":...}`;
//! failures go through [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use guardian_core::{dataset_catalog, DatasetDescriptor, QueryRecord, QueryResult};

use crate::error::ApiError;
use crate::page::INDEX_HTML;
use crate::state::AppState;

/// Client-facing message for a missing or empty question.
pub const QUESTION_REQUIRED: &str = "Question is required";

pub const SERVICE_NAME: &str = "ClimateGuardian";

// =============================================================================
// Request / response types
// =============================================================================

/// Body of POST /api/query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/query - classify and answer a question.
pub async fn query(
    State(state): State<AppState>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QueryResult>>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected query body");
            return Err(ApiError::BadRequest(QUESTION_REQUIRED.to_string()));
        }
    };

    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest(QUESTION_REQUIRED.to_string()))?;

    let guardian = state.guardian.clone();
    let question = question.to_string();
    let result = tokio::task::spawn_blocking(move || guardian.query(&question))
        .await
        .map_err(|e| ApiError::Internal(format!("query task failed: {}", e)))?;

    debug!(id = %result.id, intent = %result.intent, "Query handled");
    Ok(Json(ApiResponse::success(result)))
}

/// GET /api/history - the most recent queries, oldest first.
pub async fn history(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<QueryRecord>>>, ApiError> {
    let records = state
        .guardian
        .recent_history(state.config.history.page_size)?;
    Ok(Json(ApiResponse::success(records)))
}

/// GET /api/health - liveness and version.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /api/datasets - the public dataset catalog.
pub async fn datasets() -> Json<ApiResponse<&'static [DatasetDescriptor]>> {
    Json(ApiResponse::success(dataset_catalog()))
}

/// GET / - landing page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
