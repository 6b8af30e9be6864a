//! In-memory task store implementation for testing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use entities::Task;
use tokio::sync::RwLock;

use crate::{TaskStore, TaskStoreResult};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    tasks: BTreeMap<i32, Task>,
}

/// In-memory task store for testing purposes.
///
/// IDs come from a counter that only moves forward, matching the behaviour
/// of a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    state: RwLock<MemoryState>,
}

impl MemoryTaskStore {
    /// Creates a new in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create_task(&self, task: &Task) -> TaskStoreResult<i32> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.tasks.insert(
            id,
            Task {
                id,
                ..task.clone()
            },
        );
        tracing::debug!(task_id = id, "Created task in memory");
        Ok(id)
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn delete_task(&self, id: i32) -> TaskStoreResult<()> {
        let mut state = self.state.write().await;
        state.tasks.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_test::assert_ok;

    use super::*;

    #[tokio::test]
    async fn test_task_crud() {
        let store = MemoryTaskStore::new();

        // Create
        let task = Task::new("Test Task", "This is a test task");
        let id = store.create_task(&task).await.unwrap();
        assert!(id > 0);

        // List
        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Test Task");
        assert_eq!(tasks[0].content, "This is a test task");

        // Delete
        assert_ok!(store.delete_task(id).await);
        assert!(store.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = MemoryTaskStore::new();
        assert!(store.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_input_id_is_ignored() {
        let store = MemoryTaskStore::new();

        let mut task = Task::new("t", "c");
        task.id = 42;
        let id = store.create_task(&task).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(store.list_tasks().await.unwrap()[0].id, 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryTaskStore::new();

        let first = store.create_task(&Task::new("a", "a")).await.unwrap();
        store.delete_task(first).await.unwrap();
        let second = store.create_task(&Task::new("b", "b")).await.unwrap();

        assert_ne!(first, second);
        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, second);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = MemoryTaskStore::new();
        store.create_task(&Task::new("a", "a")).await.unwrap();

        assert_ok!(store.delete_task(999).await);
        assert_eq!(store.list_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryTaskStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .create_task(&Task::new(format!("Task {i}"), "body"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 16);
        assert!(tasks.windows(2).all(|w| w[0].id < w[1].id));
    }
}
