//! User preferences persisted next to the session blob.

use serde::{Deserialize, Serialize};

use yafue_shared::constants::SETTINGS_STORAGE_KEY;
use yafue_shared::ThemePreference;

use crate::error::Result;
use crate::secure::SecureStorage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: ThemePreference,
}

/// Load the saved settings. A missing, unreadable or corrupt record yields
/// the defaults.
pub fn load_settings<S: SecureStorage + ?Sized>(storage: &S) -> AppSettings {
    match storage.get_item(SETTINGS_STORAGE_KEY) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "corrupt settings record, using defaults");
            AppSettings::default()
        }),
        Ok(None) => AppSettings::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read settings, using defaults");
            AppSettings::default()
        }
    }
}

pub fn save_settings<S: SecureStorage + ?Sized>(storage: &S, settings: &AppSettings) -> Result<()> {
    let json = serde_json::to_string(settings)?;
    storage.set_item(SETTINGS_STORAGE_KEY, &json)?;
    tracing::info!(theme = ?settings.theme, "Settings updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, StorageKey};

    fn open(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("s.db"), StorageKey::from_secret(b"k")).unwrap()
    }

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_settings(&open(&dir)), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir);
        let settings = AppSettings {
            theme: ThemePreference::Dark,
        };

        save_settings(&db, &settings).unwrap();
        assert_eq!(load_settings(&db), settings);
    }

    #[test]
    fn test_corrupt_record_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir);
        db.set_item(SETTINGS_STORAGE_KEY, "{not json").unwrap();

        assert_eq!(load_settings(&db), AppSettings::default());
    }
}
