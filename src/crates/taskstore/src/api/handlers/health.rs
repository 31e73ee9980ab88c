//! Health check endpoint handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::AppState;
use crate::db::repositories::TaskRepository;

/// Health status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<i64>,
}

/// Handler for GET /health
///
/// Liveness only; no database interaction.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "ok".to_string(),
        database: "unknown".to_string(),
        tasks: None,
    };
    (StatusCode::OK, Json(health))
}

/// Handler for GET /health/db
///
/// Checks database connectivity and reports the current task count.
pub async fn health_detailed(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match TaskRepository::count(app_state.db.pool()).await {
        Ok(count) => {
            let health = HealthResponse {
                status: "ok".to_string(),
                database: "connected".to_string(),
                tasks: Some(count),
            };
            (StatusCode::OK, Json(health))
        }
        Err(err) => {
            tracing::error!(error = %err, "database health check failed");
            let health = HealthResponse {
                status: "error".to_string(),
                database: "error".to_string(),
                tasks: None,
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(health))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint_is_static_ok() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert!(body.tasks.is_none());
    }
}
