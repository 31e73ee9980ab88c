//! Wire types exchanged with the Task Store Service

use serde::{Deserialize, Serialize};

/// A task as returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
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

/// Create payload; the store assigns the id and forces completed=false
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

/// Update payload; rewrites all five mutable fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
    pub completed: bool,
}
