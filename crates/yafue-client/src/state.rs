//! Application state shared by every command.
//!
//! Built once at startup and passed by reference to command handlers. Tests
//! build their own instance over a temporary store and a fake backend.

use std::sync::{Arc, Mutex};

use yafue_api::ApiClient;
use yafue_shared::{Appearance, ThemePreference};
use yafue_store::SecureStorage;

use crate::events::EventBus;
use crate::stores::{MeetingStore, UserStore};
use crate::theme::ThemeStore;

pub struct AppState<S> {
    /// Backend client.
    pub api: ApiClient,

    /// Encrypted key-value storage for the session and settings.
    pub storage: Arc<Mutex<S>>,

    pub user: Arc<UserStore<S>>,

    pub meetings: Arc<MeetingStore>,

    pub theme: Arc<ThemeStore>,

    /// Every store emits here; views subscribe to re-render.
    pub events: EventBus,
}

impl<S: SecureStorage> AppState<S> {
    /// Wire the stores together. The user store still has to be
    /// [initialized](UserStore::initialize).
    pub fn new(api: ApiClient, storage: S, theme: ThemePreference, system: Appearance) -> Self {
        let events = EventBus::new();
        let storage = Arc::new(Mutex::new(storage));

        Self {
            api,
            user: Arc::new(UserStore::new(storage.clone(), events.clone())),
            meetings: Arc::new(MeetingStore::new(events.clone())),
            theme: Arc::new(ThemeStore::new(theme, system, events.clone())),
            storage,
            events,
        }
    }
}
