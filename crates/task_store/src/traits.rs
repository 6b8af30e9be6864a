//! Task store trait definition.

use async_trait::async_trait;
use entities::Task;

use crate::TaskStoreResult;

/// Trait for task storage operations.
///
/// Every operation maps to a single statement against the backing store.
/// Implementations hold no client-side locks around the database; unique id
/// assignment and visibility of concurrent writes are left to the database.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task and returns its assigned ID.
    ///
    /// The `id` of the given task is ignored. The returned ID is always
    /// greater than zero and is never handed out again, even after the task
    /// is deleted.
    async fn create_task(&self, task: &Task) -> TaskStoreResult<i32>;

    /// Lists every persisted task, ordered by ID ascending.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Deletes the task with the given ID.
    ///
    /// Deleting an ID that does not exist succeeds as a no-op.
    async fn delete_task(&self, id: i32) -> TaskStoreResult<()>;
}
