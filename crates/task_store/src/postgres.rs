//! PostgreSQL task store.

use async_trait::async_trait;
use entities::Task;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    schema::{TaskRow, SELECT_TASKS},
    StoreConfig, TaskStore, TaskStoreError, TaskStoreResult,
};

/// PostgreSQL task store (for multi-user production deployments)
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    /// Wraps an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `database_url` with default pool settings.
    pub async fn connect(database_url: &str) -> TaskStoreResult<Self> {
        Self::connect_with(&StoreConfig::new(database_url)).await
    }

    /// Connects using the given configuration.
    pub async fn connect_with(config: &StoreConfig) -> TaskStoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(TaskStoreError::Connection)?;

        tracing::info!(
            max_connections = config.max_connections,
            "Connected to PostgreSQL task store"
        );
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn create_task(&self, task: &Task) -> TaskStoreResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (opened, closed, author_id, assigned_id, title, content)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
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
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(TaskStoreError::from_statement)?;

        tracing::info!(
            task_id = id,
            deleted = result.rows_affected(),
            "Deleted task"
        );
        Ok(())
    }
}
