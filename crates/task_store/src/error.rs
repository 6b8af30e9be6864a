//! Task store error types.

use thiserror::Error;

/// SQLSTATE for a missing relation.
const PG_UNDEFINED_TABLE: &str = "42P01";
/// SQLSTATE for a missing column.
const PG_UNDEFINED_COLUMN: &str = "42703";

/// Errors that can occur during task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The database could not be reached or rejected the credentials.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The tasks table or one of its columns is missing.
    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    /// A statement failed.
    #[error("Persistence error: {0}")]
    Persistence(#[source] sqlx::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TaskStoreError {
    /// Classifies an error raised by a CRUD statement.
    ///
    /// Missing tables and columns become [`TaskStoreError::Schema`],
    /// everything else [`TaskStoreError::Persistence`].
    pub fn from_statement(err: sqlx::Error) -> Self {
        if is_schema_error(&err) {
            tracing::warn!(error = %err, "Tasks table schema is not in place");
            Self::Schema(err)
        } else {
            Self::Persistence(err)
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true for connection failures.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns true for schema failures.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Returns true for statement failures.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

fn is_schema_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                if code == PG_UNDEFINED_TABLE || code == PG_UNDEFINED_COLUMN {
                    return true;
                }
            }
            // SQLite reports both cases as a generic error with this message.
            let message = db_err.message();
            message.contains("no such table") || message.contains("no such column")
        }
        sqlx::Error::ColumnNotFound(_) => true,
        _ => false,
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;
