//! SQLite-backed storage medium.
//!
//! # Responsibility
//! - Map the key-value contract onto the migrated `kv_store` table.
//! - Keep SQL details inside the storage boundary.

use super::{StorageMedium, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection};
use std::path::Path;

/// Durable key-value medium over a single SQLite table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (and migrates) a database file as a storage medium.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an in-memory medium. State lives only as long as the value.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl StorageMedium for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteStorage;
    use crate::storage::StorageMedium;

    #[test]
    fn set_get_remove_roundtrip() {
        let mut medium = SqliteStorage::open_in_memory().unwrap();

        assert_eq!(medium.get("k").unwrap(), None);

        medium.set("k", "first").unwrap();
        assert_eq!(medium.get("k").unwrap().as_deref(), Some("first"));

        medium.set("k", "second").unwrap();
        assert_eq!(medium.get("k").unwrap().as_deref(), Some("second"));

        medium.remove("k").unwrap();
        assert_eq!(medium.get("k").unwrap(), None);
    }

    #[test]
    fn remove_of_absent_key_succeeds() {
        let mut medium = SqliteStorage::open_in_memory().unwrap();
        medium.remove("never-written").unwrap();
    }
}
