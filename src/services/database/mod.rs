// Database service module
// SQLite-backed key-value store for the app's one persisted slot

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    ///
    /// # Examples
    /// ```
    /// use happyhour::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open database at {}", path))?;

        Ok(Self { conn })
    }

    /// Initialize the database schema
    /// Creates the key-value table if it doesn't exist
    pub fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS kv_store (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )
            .context("Failed to create kv_store table")?;

        Ok(())
    }

    /// Read a slot, `None` when the key has never been written
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to read slot '{}'", key))
    }

    /// Write a slot, replacing any previous value
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
                params![key, value],
            )
            .context(format!("Failed to write slot '{}'", key))?;

        Ok(())
    }
}
