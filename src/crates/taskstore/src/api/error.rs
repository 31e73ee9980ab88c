//! API error types and HTTP response conversion
//!
//! The external contract is deliberately plain: any failure surfaces as a
//! 500 with the raw error text in the body. The gateway and the frontend
//! both treat non-success statuses uniformly, so there is no structured
//! error envelope here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::DatabaseError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage failure of any kind
    #[error("{0}")]
    Database(#[from] DatabaseError),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        tracing::error!(status = %status, error = %body, "request failed");

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(DatabaseError::from(err))
    }
}
