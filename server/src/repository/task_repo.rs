//! Task Repository
//!
//! SQLite-backed implementation of Task CRUD.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Task};

const SELECT_TASK: &str = "SELECT id, title, description, completed FROM tasks";

/// SQLite implementation of Task repository
pub struct TaskRepository {
    conn: Arc<Mutex<rusqlite::Connection>>,
}

impl TaskRepository {
    pub fn new(conn: Arc<Mutex<rusqlite::Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, ?3)",
            params![entity.title, entity.description, entity.completed],
        )?;

        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|e| DomainError::Internal(format!("task id out of range: {}", e)))?;
        Ok(Task { id, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;
        let task = conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASK), params![id], row_to_task)
            .optional()?;
        Ok(task)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_TASK))?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4",
            params![entity.title, entity.description, entity.completed, entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

/// Convert a database row to Task
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get(3)?,
    })
}
