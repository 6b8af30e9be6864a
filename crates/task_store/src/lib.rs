//! Task storage for the task tracker
//!
//! This crate provides a storage abstraction for tasks kept in a single
//! relational table. It supports PostgreSQL (for multi-user mode), SQLite
//! (for single-user/single-process mode) and an in-memory store for tests.

mod config;
mod error;
mod memory;
mod postgres;
pub mod schema;
mod sqlite;
mod traits;

use std::sync::Arc;

pub use config::*;
pub use entities::Task;
pub use error::*;
pub use memory::*;
pub use postgres::*;
pub use sqlite::*;
pub use traits::*;

/// Opens the store selected by the scheme of `config.database_url`.
pub async fn open_store(config: &StoreConfig) -> TaskStoreResult<Arc<dyn TaskStore>> {
    let store: Arc<dyn TaskStore> = match config.backend()? {
        Backend::Postgres => Arc::new(PostgresTaskStore::connect_with(config).await?),
        Backend::Sqlite => Arc::new(SqliteTaskStore::connect_with(config).await?),
        Backend::Memory => Arc::new(MemoryTaskStore::new()),
    };
    Ok(store)
}
