//src/store.rs
//! Local key-value storage. Every collection is stored whole, as one JSON
//! document under a fixed key.
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed storage keys. The stored schema is neither namespaced nor versioned.
pub mod keys {
    pub const EXERCISES: &str = "@krakenballs_exercises";
    pub const PLANS: &str = "@krakenballs_plans";
    pub const PROGRAMS: &str = "@krakenballs_programs";
    pub const THEME: &str = "@krakenballs_theme";
    /// Set once the user wipes storage: no default data is seeded afterwards.
    pub const PREVENT_AUTO_CREATE: &str = "@prevent_auto_create";
}

const DB_FILE_NAME: &str = "krakenballs.sqlite";
const APP_DATA_DIR: &str = "krakenballs";
const DATA_DIR_ENV_VAR: &str = "KRAKENBALLS_DATA_DIR";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage connection failed")]
    Connection(#[from] rusqlite::Error),
    #[error("Failed to get application data directory")]
    DataDir,
    #[error("I/O error accessing storage file")]
    Io(#[from] std::io::Error),
    #[error("Storage query failed: {0}")]
    QueryFailed(rusqlite::Error),
    #[error("Storage write failed: {0}")]
    WriteFailed(rusqlite::Error),
    #[error("Storage delete failed: {0}")]
    DeleteFailed(rusqlite::Error),
    #[error("Failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Raw string storage. Implementations only move text around; JSON lives in
/// [`read`] and [`write`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
    /// Wipes every key.
    fn clear(&self) -> Result<(), Error>;
    fn keys(&self) -> Result<Vec<String>, Error>;
}

/// SQLite-backed store with a single `kv` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let conn = Connection::open(path).map_err(Error::Connection)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory().map_err(Error::Connection)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, Error> {
        init(&conn)?;
        Ok(Self { conn })
    }
}

/// Creates the `kv` table if it doesn't exist.
fn init(conn: &Connection) -> Result<(), Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(Error::Connection)?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Error::QueryFailed)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(Error::WriteFailed)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(Error::DeleteFailed)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        self.conn
            .execute("DELETE FROM kv", [])
            .map_err(Error::DeleteFailed)?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv ORDER BY key")
            .map_err(Error::QueryFailed)?;
        let key_iter = stmt
            .query_map([], |row| row.get(0))
            .map_err(Error::QueryFailed)?;
        key_iter
            .collect::<Result<Vec<String>, _>>()
            .map_err(Error::QueryFailed)
    }
}

/// Gets the path to the storage file within the app's data directory.
/// `KRAKENBALLS_DATA_DIR` overrides the platform data directory.
pub fn get_db_path() -> Result<PathBuf, Error> {
    let app_dir = match std::env::var(DATA_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::data_dir().ok_or(Error::DataDir)?.join(APP_DATA_DIR),
    };
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir)?;
    }
    Ok(app_dir.join(DB_FILE_NAME))
}

/// Reads and parses the JSON stored under `key`.
///
/// Absent keys, storage failures and malformed JSON all come back as `None`.
/// Failures are logged and never propagated.
pub fn read<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read from storage, using empty value");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                key,
                error = %e,
                "stored value is not valid JSON for its type, using empty value"
            );
            None
        }
    }
}

/// Reads a whole collection, falling back to an empty one.
pub fn read_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    read(store, key).unwrap_or_default()
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn write<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), Error> {
    let json = serde_json::to_string(value).map_err(|source| Error::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "wrote value to storage");
    Ok(())
}
