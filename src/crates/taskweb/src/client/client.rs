//! TaskStoreClient for HTTP communication with the task store

use std::time::Duration;

use crate::client::messages::{NewTask, Task, TaskUpdate};
use crate::error::{WebError, WebResult};

/// HTTP client for the Task Store Service
///
/// Holds the backend base URL for the process lifetime. The underlying
/// `reqwest::Client` is cheap to clone; one instance is shared across all
/// request handlers.
#[derive(Debug, Clone)]
pub struct TaskStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskStoreClient {
    /// Create a new client against a base URL with a bounded per-request
    /// timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all tasks
    pub async fn list_tasks(&self) -> WebResult<Vec<Task>> {
        let response = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Create a task
    pub async fn create_task(&self, task: &NewTask) -> WebResult<()> {
        let response = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .json(task)
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Rewrite a task by id
    pub async fn update_task(&self, id: i64, task: &TaskUpdate) -> WebResult<()> {
        let response = self
            .http
            .put(format!("{}/tasks/{}", self.base_url, id))
            .json(task)
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Delete a task by id
    pub async fn delete_task(&self, id: i64) -> WebResult<()> {
        let response = self
            .http
            .delete(format!("{}/tasks/{}", self.base_url, id))
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Turn a non-success status into an error carrying the upstream
    /// status and body
    async fn check_status(response: reqwest::Response) -> WebResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Err(WebError::UpstreamStatus { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client =
            TaskStoreClient::new("http://localhost:9000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
