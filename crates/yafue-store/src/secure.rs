//! Key/value secure storage.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use yafue_shared::crypto::Sealer;

use crate::database::Database;
use crate::error::{Result, StoreError};

/// A secure key/value store holding small string records.
///
/// Deleting a key that does not exist is not an error.
pub trait SecureStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn delete_item(&self, key: &str) -> Result<()>;
}

impl SecureStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let sealed: Option<Vec<u8>> = self
            .conn()
            .query_row(
                "SELECT value FROM secure_items WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(sealed) = sealed else {
            return Ok(None);
        };

        // row key is the associated data
        let plain = Sealer::new(self.key().sealing_key()).open(&sealed, key.as_bytes())?;
        String::from_utf8(plain)
            .map(Some)
            .map_err(|_| StoreError::Encoding(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let sealed =
            Sealer::new(self.key().sealing_key()).seal(value.as_bytes(), key.as_bytes())?;
        self.conn().execute(
            "INSERT INTO secure_items (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, sealed, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(key, "secure item written");
        Ok(())
    }

    fn delete_item(&self, key: &str) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM secure_items WHERE key = ?1", params![key])?;
        tracing::debug!(key, existed = affected > 0, "secure item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::StorageKey;

    fn open(dir: &tempfile::TempDir, secret: &[u8]) -> Database {
        Database::open_at(&dir.path().join("secure.db"), StorageKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn test_set_get_overwrite_delete() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir, b"device");

        assert_eq!(db.get_item("ya_fue_user_data").unwrap(), None);

        db.set_item("ya_fue_user_data", r#"{"id":"u1"}"#).unwrap();
        db.set_item("ya_fue_user_data", r#"{"id":"u2"}"#).unwrap();
        assert_eq!(
            db.get_item("ya_fue_user_data").unwrap().as_deref(),
            Some(r#"{"id":"u2"}"#)
        );

        db.delete_item("ya_fue_user_data").unwrap();
        db.delete_item("ya_fue_user_data").unwrap();
        assert_eq!(db.get_item("ya_fue_user_data").unwrap(), None);
    }

    #[test]
    fn test_values_are_sealed_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir, b"device");
        db.set_item("k", "juli@example.com").unwrap();

        let raw: Vec<u8> = db
            .conn()
            .query_row("SELECT value FROM secure_items WHERE key = 'k'", [], |row| row.get(0))
            .unwrap();
        assert!(!String::from_utf8_lossy(&raw).contains("juli@example.com"));
    }

    #[test]
    fn test_swapped_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir, b"device");
        db.set_item("ya_fue_user_data", r#"{"id":"u1"}"#).unwrap();
        db.set_item("ya_fue_settings", r#"{"theme":"dark"}"#).unwrap();

        db.conn()
            .execute(
                "UPDATE secure_items SET value =
                   (SELECT value FROM secure_items WHERE key = 'ya_fue_user_data')
                 WHERE key = 'ya_fue_settings'",
                [],
            )
            .unwrap();

        assert!(matches!(db.get_item("ya_fue_settings"), Err(StoreError::Crypto(_))));
        assert!(db.get_item("ya_fue_user_data").unwrap().is_some());
    }

    #[test]
    fn test_wrong_device_key_cannot_read() {
        let dir = tempfile::tempdir().unwrap();
        open(&dir, b"device-a").set_item("k", "v").unwrap();

        let other = open(&dir, b"device-b");
        assert!(matches!(other.get_item("k"), Err(StoreError::Crypto(_))));
    }
}
