//! Task repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::{Task, TaskDraft, TaskRow};

/// Task repository for managing task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task and return the database-assigned id
    ///
    /// `completed` is always stored as 0 on insert; callers cannot create
    /// an already-completed task.
    pub async fn create(pool: &DatabasePool, draft: &TaskDraft) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, due_date, priority, completed)
             VALUES (?, ?, ?, ?, 0)",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.due_date)
        .bind(&draft.priority)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get all tasks in storage order
    ///
    /// Returns an empty vector (never an error) when the table is empty.
    pub async fn list(pool: &DatabasePool) -> DbResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, due_date, priority, completed FROM tasks",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Get a task by id
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, due_date, priority, completed FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Task::from))
    }

    /// Rewrite all five mutable columns for the row matching id
    ///
    /// Returns the number of rows affected; zero means the id did not
    /// exist, which callers treat as a successful no-op.
    pub async fn update(
        pool: &DatabasePool,
        id: i64,
        draft: &TaskDraft,
        completed: bool,
    ) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, due_date = ?, priority = ?, completed = ?
             WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.due_date)
        .bind(&draft.priority)
        .bind(i64::from(completed))
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the row matching id; unknown ids affect zero rows
    pub async fn delete(pool: &DatabasePool, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count total tasks
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConnection;

    async fn setup_pool() -> DatabaseConnection {
        // Single connection so every statement sees the same in-memory
        // database.
        let conn = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                due_date TEXT NOT NULL DEFAULT '',
                priority TEXT NOT NULL DEFAULT '',
                completed INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(conn.pool())
        .await
        .unwrap();

        conn
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "2%".to_string(),
            due_date: "2024-01-01".to_string(),
            priority: "low".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_defaults_incomplete() {
        let conn = setup_pool().await;

        let id = TaskRepository::create(conn.pool(), &draft("Buy milk"))
            .await
            .unwrap();
        assert!(id > 0);

        let task = TaskRepository::get_by_id(conn.pool(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert_eq!(task.due_date, "2024-01-01");
        assert_eq!(task.priority, "low");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_vec() {
        let conn = setup_pool().await;

        let tasks = TaskRepository::list(conn.pool()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_created_tasks() {
        let conn = setup_pool().await;

        TaskRepository::create(conn.pool(), &draft("Task 1"))
            .await
            .unwrap();
        TaskRepository::create(conn.pool(), &draft("Task 2"))
            .await
            .unwrap();

        let tasks = TaskRepository::list(conn.pool()).await.unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_update_rewrites_all_fields() {
        let conn = setup_pool().await;

        let id = TaskRepository::create(conn.pool(), &draft("Buy milk"))
            .await
            .unwrap();

        let updated = TaskDraft {
            title: "Buy oat milk".to_string(),
            description: "barista".to_string(),
            due_date: "2024-02-02".to_string(),
            priority: "high".to_string(),
        };
        let affected = TaskRepository::update(conn.pool(), id, &updated, true)
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let task = TaskRepository::get_by_id(conn.pool(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.description, "barista");
        assert_eq!(task.due_date, "2024-02-02");
        assert_eq!(task.priority, "high");
        assert!(task.completed);
    }

    #[tokio::test]
    async fn test_update_missing_id_affects_zero_rows() {
        let conn = setup_pool().await;

        let affected = TaskRepository::update(conn.pool(), 999, &draft("ghost"), false)
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let conn = setup_pool().await;

        let id = TaskRepository::create(conn.pool(), &draft("Buy milk"))
            .await
            .unwrap();

        let affected = TaskRepository::delete(conn.pool(), id).await.unwrap();
        assert_eq!(affected, 1);

        let task = TaskRepository::get_by_id(conn.pool(), id).await.unwrap();
        assert!(task.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let conn = setup_pool().await;

        let affected = TaskRepository::delete(conn.pool(), 999).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_count_tasks() {
        let conn = setup_pool().await;

        TaskRepository::create(conn.pool(), &draft("Task 1"))
            .await
            .unwrap();
        TaskRepository::create(conn.pool(), &draft("Task 2"))
            .await
            .unwrap();

        let count = TaskRepository::count(conn.pool()).await.unwrap();
        assert_eq!(count, 2);
    }
}
