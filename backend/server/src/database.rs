//! # SQLite
//!
//! On-disk feedback log.
//!
//! Core purpose is to append contact submissions and list them back, newest first.
//!
//! ## Requirements
//!
//! - Survives restarts
//! - Append-only, no updates or deletes
//! - Full scans are fine, there is no scale requirement
//!
//! ## Implementation
//!
//! - Single `feedback` table, `id INTEGER PRIMARY KEY AUTOINCREMENT` so ids are never reused
//! - `timestamp` filled by SQLite with `CURRENT_TIMESTAMP` (UTC, `YYYY-MM-DD HH:MM:SS`)
//! - The store only keeps the file path, every call opens its own connection and drops it on return
//! - Concurrent writers are serialized by SQLite, no retries here
use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, params};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Feedback, FeedbackRecord};

const CREATE_FEEDBACK: &str = "
    CREATE TABLE IF NOT EXISTS feedback (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

const INSERT_FEEDBACK: &str = "INSERT INTO feedback (name, email, message) VALUES (?1, ?2, ?3)";

const SELECT_FEEDBACK: &str =
    "SELECT id, name, email, message, timestamp FROM feedback ORDER BY id DESC";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::Constraint(e),
            _ => StoreError::Unavailable(e),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FeedbackStore {
    path: PathBuf,
}

impl FeedbackStore {
    /// Points the store at `path` and makes sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.initialize()?;

        Ok(store)
    }

    pub fn initialize(&self) -> Result<(), StoreError> {
        let connection = self.connect()?;
        connection.execute(CREATE_FEEDBACK, [])?;

        info!("Database {} initialized", self.path.display());
        Ok(())
    }

    pub fn append(&self, feedback: &Feedback) -> Result<i64, StoreError> {
        let connection = self.connect()?;
        connection.execute(
            INSERT_FEEDBACK,
            params![feedback.name(), feedback.email(), feedback.message()],
        )?;

        let id = connection.last_insert_rowid();
        debug!("Stored feedback {id}");

        Ok(id)
    }

    pub fn list_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(SELECT_FEEDBACK)?;

        let records = statement
            .query_map([], |row| {
                Ok(FeedbackRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    message: row.get(3)?,
                    timestamp: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{TempDir, tempdir};

    use super::*;

    fn temp_store() -> (TempDir, FeedbackStore) {
        let dir = tempdir().unwrap();
        let store = FeedbackStore::open(dir.path().join("feedback.db")).unwrap();

        (dir, store)
    }

    fn feedback(name: &str, email: &str, message: &str) -> Feedback {
        Feedback::new(name, email, message).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let (_dir, store) = temp_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_list() {
        let (_dir, store) = temp_store();

        let id = store.append(&feedback("Ana", "a@x.com", "Hi")).unwrap();
        let records = store.list_all().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[0].email, "a@x.com");
        assert_eq!(records[0].message, "Hi");
        assert!(!records[0].timestamp.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let (_dir, store) = temp_store();

        let first = store.append(&feedback("A", "a@x.com", "first")).unwrap();
        let second = store.append(&feedback("B", "b@x.com", "second")).unwrap();
        let third = store.append(&feedback("C", "c@x.com", "third")).unwrap();
        assert!(first < second && second < third);

        let names: Vec<_> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (dir, store) = temp_store();
        store.append(&feedback("Ana", "a@x.com", "Hi")).unwrap();

        store.initialize().unwrap();
        let reopened = FeedbackStore::open(dir.path().join("feedback.db")).unwrap();

        let records = reopened.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ana");
    }

    #[test]
    fn test_ids_not_reused() {
        let (dir, store) = temp_store();
        let first = store.append(&feedback("A", "a@x.com", "one")).unwrap();

        // Rows are never deleted through the store, but AUTOINCREMENT must hold even if they are.
        Connection::open(dir.path().join("feedback.db"))
            .unwrap()
            .execute("DELETE FROM feedback", [])
            .unwrap();

        let second = store.append(&feedback("B", "b@x.com", "two")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_unreachable_medium() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join("feedback.db");

        assert!(matches!(
            FeedbackStore::open(missing),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn test_constraint_classification() {
        let (dir, _store) = temp_store();
        let connection = Connection::open(dir.path().join("feedback.db")).unwrap();

        let err = connection
            .execute(
                "INSERT INTO feedback (name, email, message) VALUES (NULL, 'a@x.com', 'Hi')",
                [],
            )
            .unwrap_err();

        assert!(matches!(StoreError::from(err), StoreError::Constraint(_)));
    }
}
