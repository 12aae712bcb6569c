//! Named text slots stored in the SQLite `slots` table.
//!
//! Each slot is one row keyed by name. Writing a slot replaces its value and
//! refreshes `updated_at`.

use super::db::Db;
use crate::libs::error::PersistenceError;
use crate::libs::persistence::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SELECT_SLOT: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT: &str = "DELETE FROM slots WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM slots ORDER BY key";

/// SQLite-backed [`KeyValueStore`]: one row per slot.
///
/// Several `Slots` may point at the same database file; every call goes
/// straight to SQLite so they observe each other's writes.
pub struct Slots {
    /// Migrated connection owning the `slots` table.
    pub conn: Connection,
}

impl Slots {
    /// Opens the slots table in the database file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Database file, created and migrated if needed. Callers
    ///   normally pass `StorageConfig::database_path()`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Database`] if the file cannot be opened or
    /// a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Slots, PersistenceError> {
        Ok(Slots { conn: Db::open(path)?.conn })
    }

    /// Slots in a private in-memory database.
    pub fn in_memory() -> Result<Slots, PersistenceError> {
        Ok(Slots { conn: Db::in_memory()?.conn })
    }

    /// Names of all stored slots, sorted.
    pub fn keys(&self) -> Result<Vec<String>, PersistenceError> {
        let mut stmt = self.conn.prepare(SELECT_KEYS)?;
        let keys = stmt.query_map([], |row| row.get::<_, String>(0))?.collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for Slots {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let value = self.conn.query_row(SELECT_SLOT, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn.execute(UPSERT_SLOT, params![key, value])?;
        Ok(())
    }

    /// Deletes the row for `key`.
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted, `false` if the slot did not exist.
    fn remove(&mut self, key: &str) -> Result<bool, PersistenceError> {
        let deleted = self.conn.execute(DELETE_SLOT, params![key])?;
        Ok(deleted > 0)
    }
}
