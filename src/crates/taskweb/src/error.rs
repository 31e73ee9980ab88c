//! Frontend error types and HTTP response conversion
//!
//! Upstream failures are surfaced to the browser, never masked as an
//! empty task list. A non-success status from the store propagates with
//! its original status code and body; transport failures (refused
//! connection, timeout) become 502.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for frontend operations
pub type WebResult<T> = Result<T, WebError>;

/// Frontend error type
#[derive(Debug, Error)]
pub enum WebError {
    /// The task store answered with a non-success status
    #[error("Task store returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The call to the task store failed outright (connect, timeout, decode)
    #[error("Task store request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        tracing::error!(status = %status, error = %body, "request failed");

        (status, body).into_response()
    }
}
