//! SQLite task store.

use async_trait::async_trait;
use entities::Task;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::{
    schema::{TaskRow, SELECT_TASKS},
    StoreConfig, TaskStore, TaskStoreError, TaskStoreResult,
};

/// SQLite task store (for single-user/single-process mode)
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Wraps an existing connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `database_url` with default pool settings.
    pub async fn connect(database_url: &str) -> TaskStoreResult<Self> {
        Self::connect_with(&StoreConfig::new(database_url)).await
    }

    /// Connects using the given configuration.
    pub async fn connect_with(config: &StoreConfig) -> TaskStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(TaskStoreError::Connection)?;

        tracing::info!(
            max_connections = config.max_connections,
            "Opened SQLite task store"
        );
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create_task(&self, task: &Task) -> TaskStoreResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO tasks (opened, closed, author_id, assigned_id, title, content)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(task.opened)
        .bind(task.closed)
        .bind(task.author_id)
        .bind(task.assigned_id)
        .bind(&task.title)
        .bind(&task.content)
        .fetch_one(&self.pool)
        .await
        .map_err(TaskStoreError::from_statement)?;

        tracing::info!(task_id = id, "Created task");
        Ok(id)
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(SELECT_TASKS)
            .fetch_all(&self.pool)
            .await
            .map_err(TaskStoreError::from_statement)?;

        tracing::debug!(count = rows.len(), "Listed tasks");
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn delete_task(&self, id: i32) -> TaskStoreResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(TaskStoreError::from_statement)?;

        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}
