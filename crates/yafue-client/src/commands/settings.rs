use tracing::info;

use yafue_shared::ThemePreference;
use yafue_store::settings::{load_settings, save_settings};
use yafue_store::{AppSettings, SecureStorage};

use crate::error::Result;
use crate::state::AppState;
use crate::stores::lock;

pub fn get_settings<S: SecureStorage>(state: &AppState<S>) -> AppSettings {
    load_settings(&*lock(&state.storage))
}

/// Apply a theme preference and remember it for the next launch.
pub fn set_theme<S: SecureStorage>(state: &AppState<S>, theme: ThemePreference) -> Result<()> {
    state.theme.set_theme(theme);
    persist_theme(state)
}

/// Flip between light and dark and remember the choice. Returns whether the
/// dark theme is now active.
pub fn toggle_theme<S: SecureStorage>(state: &AppState<S>) -> Result<bool> {
    state.theme.toggle_theme();
    persist_theme(state)?;
    Ok(state.theme.is_dark())
}

fn persist_theme<S: SecureStorage>(state: &AppState<S>) -> Result<()> {
    let storage = lock(&state.storage);
    let mut settings = load_settings(&*storage);
    settings.theme = state.theme.preference();
    save_settings(&*storage, &settings)?;
    info!(theme = ?settings.theme, "Theme saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::app_with;
    use axum::Router;

    #[tokio::test]
    async fn test_defaults_to_auto() {
        let state = app_with(Router::new()).await;
        assert_eq!(get_settings(&state).theme, ThemePreference::Auto);
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let state = app_with(Router::new()).await;

        assert!(toggle_theme(&state).unwrap());
        assert_eq!(get_settings(&state).theme, ThemePreference::Dark);

        assert!(!toggle_theme(&state).unwrap());
        assert_eq!(get_settings(&state).theme, ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_set_theme_persists_auto() {
        let state = app_with(Router::new()).await;
        set_theme(&state, ThemePreference::Auto).unwrap();
        assert_eq!(get_settings(&state).theme, ThemePreference::Auto);
        assert!(!state.theme.is_dark());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let state = app_with(Router::new()).await;
        state.storage.lock().unwrap().fail_writes = true;

        assert!(set_theme(&state, ThemePreference::Dark).is_err());
        // applied even though it could not be saved
        assert!(state.theme.is_dark());
    }
}
