//! Health check endpoint for service monitoring.

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and database connectivity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Verifies database connectivity with a trivial query; an unreachable
/// database turns into the standard 500 error response.
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
