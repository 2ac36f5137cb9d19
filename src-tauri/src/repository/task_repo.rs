//! Task Repository
//!
//! SQLite-backed task storage. Each list keeps its order in the `position`
//! column (0-based within the list).

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::TaskRepository;
use crate::domain::{validate_lists, validate_title, DomainError, DomainResult, ListKind, TaskLists};

/// SQLite implementation of the task repository
#[derive(Clone)]
pub struct SqliteTaskRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTaskRepository {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn read_lists(conn: &Connection) -> DomainResult<TaskLists> {
    let mut stmt = conn.prepare("SELECT title, status FROM tasks ORDER BY position, id")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

    let mut lists = TaskLists::default();
    for row in rows {
        let (title, status) = row?;
        match ListKind::from_str(&status) {
            Some(kind) => lists.list_mut(kind).push(title),
            None => log::warn!("skipping task {:?} with unknown status {:?}", title, status),
        }
    }
    Ok(lists)
}

fn write_lists(conn: &Connection, lists: &TaskLists) -> DomainResult<()> {
    let updated_at = now();
    conn.execute("DELETE FROM tasks", [])?;
    let mut insert = conn.prepare(
        "INSERT INTO tasks (title, status, position, updated_at) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for kind in ListKind::ALL {
        for (position, title) in lists.list(kind).iter().enumerate() {
            insert.execute(params![title, kind.as_str(), position as i64, updated_at])?;
        }
    }
    Ok(())
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn load(&self) -> DomainResult<TaskLists> {
        let conn = self.conn.lock().await;
        read_lists(&conn)
    }

    async fn append(&self, title: &str) -> DomainResult<()> {
        validate_title(title)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO tasks (title, status, position, updated_at)
             SELECT ?1, ?2, COALESCE(MAX(position) + 1, 0), ?3 FROM tasks WHERE status = ?2",
            params![title, ListKind::Ongoing.as_str(), now()],
        )?;
        Ok(())
    }

    async fn replace(&self, lists: &TaskLists) -> DomainResult<()> {
        validate_lists(lists)?;
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        write_lists(&tx, lists)?;
        tx.commit()?;
        Ok(())
    }

    async fn complete(&self, index: usize, title: &str) -> DomainResult<TaskLists> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let mut lists = read_lists(&tx)?;
        if !lists.complete(index, title) {
            return Err(match lists.ongoing.get(index) {
                Some(stored) => DomainError::Conflict(format!(
                    "ongoing task {} is {:?}, not {:?}",
                    index, stored, title
                )),
                None => DomainError::NotFound(format!("no ongoing task at position {}", index)),
            });
        }
        write_lists(&tx, &lists)?;
        tx.commit()?;
        Ok(lists)
    }
}
