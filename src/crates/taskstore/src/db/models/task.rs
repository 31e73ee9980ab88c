//! Task model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A to-do item as seen by the rest of the service and over the wire
///
/// Optional text fields are plain strings with "" meaning absent; the
/// service stores whatever it is given and enforces no format on
/// `due_date` or `priority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,

    /// Task title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Date-like string, passed through as text
    pub due_date: String,

    /// Free-form priority label
    pub priority: String,

    /// Completion flag; boolean here, INTEGER 0/1 in storage
    pub completed: bool,
}

/// The four caller-supplied text fields of a task
///
/// Used for both insert and update; `id` and `completed` are handled
/// separately (assigned by the database, forced false on create).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

/// Raw row shape of the `tasks` table
///
/// `completed` is the stored integer flag. Conversion to [`Task`] is the
/// only place the 0/1 representation appears.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
    pub completed: i64,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            priority: row.priority,
            completed: row.completed != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(completed: i64) -> TaskRow {
        TaskRow {
            id: 7,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            due_date: "2024-01-01".to_string(),
            priority: "low".to_string(),
            completed,
        }
    }

    #[test]
    fn test_row_to_task_incomplete() {
        let task = Task::from(row(0));
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_row_to_task_complete() {
        let task = Task::from(row(1));
        assert!(task.completed);
    }

    #[test]
    fn test_row_to_task_nonzero_is_complete() {
        // Any nonzero flag reads as completed.
        let task = Task::from(row(2));
        assert!(task.completed);
    }

    #[test]
    fn test_task_serializes_boolean() {
        let json = serde_json::to_value(Task::from(row(1))).unwrap();
        assert_eq!(json["completed"], serde_json::Value::Bool(true));
        assert_eq!(json["id"], serde_json::json!(7));
    }
}
