use super::migrations::init_with_migrations;
use crate::libs::error::PersistenceError;
use rusqlite::Connection;
use std::path::Path;

/// A migrated SQLite connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the database file at `path` and applies
    /// pending migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, PersistenceError> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Private database that disappears with the connection.
    pub fn in_memory() -> Result<Db, PersistenceError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Db, PersistenceError> {
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
