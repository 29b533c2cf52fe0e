//! Per-device secret from which the sealing key is derived.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use yafue_shared::crypto::{self, SymmetricKey};

use crate::error::Result;

const KEY_FILE_NAME: &str = "storage.key";

/// Key sealing every value in the secure store.
#[derive(Clone)]
pub struct StorageKey {
    sealing: SymmetricKey,
}

impl StorageKey {
    /// Derive the sealing key from raw device secret bytes.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            sealing: crypto::derive_storage_key(secret),
        }
    }

    /// Read the hex-encoded device secret from `dir/storage.key`, creating it
    /// with fresh random bytes on first run.
    pub fn load_or_create(dir: &Path) -> Result<Self> {
        let path = dir.join(KEY_FILE_NAME);

        if path.exists() {
            let hex_secret = std::fs::read_to_string(&path)?;
            let secret = crypto::key_from_slice(&hex::decode(hex_secret.trim())?)?;
            tracing::debug!(path = %path.display(), "loaded device key");
            return Ok(Self::from_secret(&secret));
        }

        std::fs::create_dir_all(dir)?;
        let secret = crypto::generate_key();
        write_secret_file(&path, hex::encode(secret).as_bytes())?;

        tracing::info!(path = %path.display(), "created device key");
        Ok(Self::from_secret(&secret))
    }

    pub(crate) fn sealing_key(&self) -> &SymmetricKey {
        &self.sealing
    }
}

impl fmt::Debug for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorageKey(<redacted>)")
    }
}

/// Create `path` owner-only from the start. Fails if it already exists.
fn write_secret_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[test]
    fn test_created_once_then_reloaded() {
        let dir = tempfile::tempdir().unwrap();

        let first = StorageKey::load_or_create(dir.path()).unwrap();
        let second = StorageKey::load_or_create(dir.path()).unwrap();

        assert_eq!(first.sealing_key(), second.sealing_key());
        assert!(dir.path().join(KEY_FILE_NAME).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        StorageKey::load_or_create(dir.path()).unwrap();

        let mode = std::fs::metadata(dir.path().join(KEY_FILE_NAME))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_secret_file_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(KEY_FILE_NAME);
        std::fs::write(&path, "existing").unwrap();

        assert!(matches!(
            write_secret_file(&path, b"new"),
            Err(StoreError::Io(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_corrupt_key_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(KEY_FILE_NAME), "not-hex").unwrap();

        assert!(matches!(
            StorageKey::load_or_create(dir.path()),
            Err(StoreError::Hex(_))
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = StorageKey::from_secret(b"device");
        assert_eq!(format!("{key:?}"), "StorageKey(<redacted>)");
    }
}
