//! Task API request models
//!
//! Every field carries `#[serde(default)]`: absent fields coerce to empty
//! strings (or false) rather than rejecting the request. Syntactically
//! malformed JSON is still rejected by the extractor — the permissiveness
//! is per-field, not per-body.

use serde::{Deserialize, Serialize};

use crate::db::models::TaskDraft;

/// Request to create a new task
///
/// `id` and `completed` are not accepted here: the database assigns the
/// id and new tasks always start incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub priority: String,
}

impl CreateTaskRequest {
    /// Convert into the storage draft
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
        }
    }
}

/// Request to update an existing task
///
/// All five mutable fields are rewritten; this is a full replace, not a
/// patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub completed: bool,
}

impl UpdateTaskRequest {
    /// Split into the storage draft and the completion flag
    pub fn into_parts(self) -> (TaskDraft, bool) {
        (
            TaskDraft {
                title: self.title,
                description: self.description,
                due_date: self.due_date,
                priority: self.priority,
            },
            self.completed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_missing_fields_default_to_empty() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, "");
        assert_eq!(req.due_date, "");
        assert_eq!(req.priority, "");
    }

    #[test]
    fn test_create_request_empty_body_object() {
        let req: CreateTaskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title, "");
    }

    #[test]
    fn test_create_request_malformed_json_rejected() {
        let result = serde_json::from_str::<CreateTaskRequest>("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_missing_completed_defaults_false() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert!(!req.completed);
    }

    #[test]
    fn test_update_request_into_parts() {
        let req: UpdateTaskRequest =
            serde_json::from_str(r#"{"title":"t","priority":"high","completed":true}"#).unwrap();
        let (draft, completed) = req.into_parts();
        assert_eq!(draft.title, "t");
        assert_eq!(draft.priority, "high");
        assert!(completed);
    }
}
