use std::sync::Mutex;

use tracing::debug;

use yafue_shared::{Appearance, ThemePreference};

use crate::events::{EventBus, StoreEvent};
use crate::stores::lock;
use crate::theme::palette::{Palette, DARK, LIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ThemeState {
    preference: ThemePreference,
    system: Appearance,
}

/// The active theme. `Auto` follows whatever appearance the host last
/// reported through [`ThemeStore::set_system_appearance`].
pub struct ThemeStore {
    state: Mutex<ThemeState>,
    events: EventBus,
}

impl ThemeStore {
    pub fn new(preference: ThemePreference, system: Appearance, events: EventBus) -> Self {
        Self {
            state: Mutex::new(ThemeState { preference, system }),
            events,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        lock(&self.state).preference
    }

    pub fn system_appearance(&self) -> Appearance {
        lock(&self.state).system
    }

    /// The appearance actually in effect.
    pub fn appearance(&self) -> Appearance {
        let state = *lock(&self.state);
        match state.preference {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::Auto => state.system,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.appearance() == Appearance::Dark
    }

    pub fn palette(&self) -> &'static Palette {
        if self.is_dark() {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Switch to the explicit opposite of what is on screen.
    pub fn toggle_theme(&self) -> &'static Palette {
        let next = if self.is_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.set_theme(next);
        self.palette()
    }

    pub fn set_theme(&self, preference: ThemePreference) {
        lock(&self.state).preference = preference;
        debug!(?preference, "Theme preference changed");
        self.emit();
    }

    pub fn set_system_appearance(&self, appearance: Appearance) {
        let changed = {
            let mut state = lock(&self.state);
            let before = state.system;
            state.system = appearance;
            before != appearance && state.preference == ThemePreference::Auto
        };
        if changed {
            self.emit();
        }
    }

    fn emit(&self) {
        self.events.emit(StoreEvent::ThemeChanged {
            dark: self.is_dark(),
        });
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemePreference::Light, Appearance::Light, EventBus::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_default_is_light() {
        let theme = ThemeStore::default();
        assert!(!theme.is_dark());
        assert!(ptr::eq(theme.palette(), &LIGHT));
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        for pref in [ThemePreference::Light, ThemePreference::Dark, ThemePreference::Auto] {
            let theme = ThemeStore::new(pref, Appearance::Dark, EventBus::new());
            let before = theme.palette();

            let toggled = theme.toggle_theme();
            assert!(!ptr::eq(toggled, before));
            assert!(ptr::eq(theme.toggle_theme(), before));
        }
    }

    #[test]
    fn test_auto_follows_system() {
        let theme = ThemeStore::new(ThemePreference::Auto, Appearance::Light, EventBus::new());
        assert!(!theme.is_dark());

        theme.set_system_appearance(Appearance::Dark);
        assert!(theme.is_dark());
        assert!(ptr::eq(theme.palette(), &DARK));
    }

    #[test]
    fn test_explicit_preference_ignores_system() {
        let theme = ThemeStore::new(ThemePreference::Light, Appearance::Dark, EventBus::new());
        assert!(!theme.is_dark());

        theme.set_theme(ThemePreference::Dark);
        theme.set_system_appearance(Appearance::Light);
        assert!(theme.is_dark());
    }

    #[tokio::test]
    async fn test_emits_theme_changed() {
        let events = EventBus::new();
        let mut rx = events.subscribe();
        let theme = ThemeStore::new(ThemePreference::Auto, Appearance::Light, events);

        theme.toggle_theme();
        // explicit preference: system changes are not announced
        theme.set_system_appearance(Appearance::Dark);
        theme.set_theme(ThemePreference::Auto);

        assert_eq!(rx.recv().await.unwrap(), StoreEvent::ThemeChanged { dark: true });
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::ThemeChanged { dark: true });
        assert!(rx.try_recv().is_err());
    }
}
