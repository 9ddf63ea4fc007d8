//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole article collection as one serialized value in a
//!   fixed key-value slot.
//! - Recover from corrupt persisted state by falling back to empty.
//!
//! # Invariants
//! - `save` replaces the slot value atomically (single UPSERT statement).
//! - `load` returns an empty collection for an absent or unparsable slot;
//!   only transport failures surface as errors.

use crate::db::DbError;
use crate::model::article::Article;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key holding the serialized reading list.
pub const READING_LIST_SLOT: &str = "readingList";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence contract for the article collection snapshot.
pub trait SnapshotRepository {
    /// Loads the persisted collection; absent or corrupt data loads as empty.
    fn load(&self) -> RepoResult<Vec<Article>>;
    /// Overwrites the slot with the full serialized collection.
    fn save(&self, articles: &[Article]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `slots` table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
    slot_key: &'static str,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Creates a repository bound to the default reading-list slot.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_slot_key(conn, READING_LIST_SLOT)
    }

    /// Creates a repository bound to a caller-chosen slot key.
    pub fn with_slot_key(conn: &'conn Connection, slot_key: &'static str) -> Self {
        Self { conn, slot_key }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self) -> RepoResult<Vec<Article>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [self.slot_key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Article>>(&raw) {
            Ok(articles) => Ok(articles),
            Err(err) => {
                warn!(
                    "event=snapshot_load module=repo status=recovered slot={} error={err}",
                    self.slot_key
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, articles: &[Article]) -> RepoResult<()> {
        let value = serde_json::to_string(articles)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.slot_key, value],
        )?;

        Ok(())
    }
}
