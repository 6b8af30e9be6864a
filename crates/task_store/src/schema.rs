//! Tasks table layout.
//!
//! The stores never create or alter the table. The DDL below is what they
//! expect to find; deployment tooling and tests apply it.

use entities::Task;
use sqlx::FromRow;

/// PostgreSQL definition of the tasks table.
pub const POSTGRES_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    opened BIGINT,
    closed BIGINT,
    author_id INT,
    assigned_id INT,
    title TEXT,
    content TEXT
)
"#;

/// SQLite definition of the tasks table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the ID of a deleted row.
pub const SQLITE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    opened INTEGER,
    closed INTEGER,
    author_id INTEGER,
    assigned_id INTEGER,
    title TEXT,
    content TEXT
)
"#;

/// Column list shared by the SQL backends. NULLs read back as zero values.
pub(crate) const SELECT_TASKS: &str = "SELECT id, COALESCE(opened, 0) AS opened, \
     COALESCE(closed, 0) AS closed, COALESCE(author_id, 0) AS author_id, \
     COALESCE(assigned_id, 0) AS assigned_id, COALESCE(title, '') AS title, \
     COALESCE(content, '') AS content
     FROM tasks
     ORDER BY id ASC";

/// Database row for Task
#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    pub id: i32,
    pub opened: i64,
    pub closed: i64,
    pub author_id: i32,
    pub assigned_id: i32,
    pub title: String,
    pub content: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            opened: row.opened,
            closed: row.closed,
            author_id: row.author_id,
            assigned_id: row.assigned_id,
            title: row.title,
            content: row.content,
        }
    }
}
