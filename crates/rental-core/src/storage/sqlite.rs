//! SQLite-backed key-value substrate

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::substrate::{KeyValueStore, SubstrateError};

/// Key-value storage in the `kv` table
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    /// Create a new key-value store over a migrated connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All stored keys, sorted
    ///
    /// # Errors
    /// Returns an error if the keys cannot be listed
    pub fn keys(&self) -> Result<Vec<String>, SubstrateError> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT key FROM kv ORDER BY key
            ",
        )?;

        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn read(&self, key: &str) -> Result<Option<String>, SubstrateError> {
        let value = self
            .conn
            .query_row(
                r"
                SELECT value FROM kv WHERE key = ?1
                ",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SubstrateError> {
        self.conn.execute(
            r"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}
