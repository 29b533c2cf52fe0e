//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] plus the sealing
//! key, and guarantees that migrations are run before any other operation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::key::StorageKey;
use crate::migrations;

const DB_FILE_NAME: &str = "yafue.db";

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
    key: StorageKey,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database and the device key live in the platform data directory:
    /// - Linux:   `~/.local/share/yafue/`
    /// - macOS:   `~/Library/Application Support/app.yafue.yafue/`
    /// - Windows: `{FOLDERID_RoamingAppData}\yafue\yafue\data\`
    pub fn new() -> Result<Self> {
        Self::open_in_dir(&default_data_dir()?)
    }

    /// Open (or create) the database and device key inside `dir`.
    pub fn open_in_dir(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let key = StorageKey::load_or_create(dir)?;
        let db_path = dir.join(DB_FILE_NAME);

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path, key)
    }

    /// Open (or create) a database at an explicit path with an explicit key.
    pub fn open_at(path: &Path, key: StorageKey) -> Result<Self> {
        let mut conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run_migrations(&mut conn)?;

        Ok(Self { conn, key })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}

/// Platform data directory for the application.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("app", "yafue", "yafue")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StoreError::NoDataDir)
}
