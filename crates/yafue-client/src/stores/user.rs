//! The logged-in user, persisted to secure storage.
//!
//! Storage failures never reach the caller of `set_user` / `logout` /
//! `initialize`: they are logged and the session falls back to logged-out.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, info, warn};

use yafue_shared::constants::USER_STORAGE_KEY;
use yafue_shared::{AuthResponse, User};
use yafue_store::{SecureStorage, StoreError};

use crate::events::{EventBus, StoreEvent};
use crate::stores::lock;

#[derive(Debug, Clone)]
struct UserState {
    user: Option<User>,
    is_loading: bool,
}

pub struct UserStore<S> {
    storage: Arc<Mutex<S>>,
    state: Mutex<UserState>,
    events: EventBus,
}

impl<S: SecureStorage> UserStore<S> {
    /// A store that is still loading and has no user yet.
    pub fn new(storage: Arc<Mutex<S>>, events: EventBus) -> Self {
        Self {
            storage,
            state: Mutex::new(UserState {
                user: None,
                is_loading: true,
            }),
            events,
        }
    }

    pub fn user(&self) -> Option<User> {
        lock(&self.state).user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        lock(&self.state).user.is_some()
    }

    /// True until [`UserStore::initialize`] has completed.
    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading
    }

    /// Restore the session saved by a previous run.
    pub fn initialize(&self) {
        debug!("Looking for a saved user");

        let restored = match lock(&self.storage).get_item(USER_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(Some(user)),
                Err(e) => {
                    error!(error = %e, "Saved user is corrupt");
                    Some(None)
                }
            },
            Ok(None) => {
                debug!("No saved user found");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to read saved user");
                Some(None)
            }
        };

        {
            let mut state = lock(&self.state);
            if let Some(user) = restored {
                state.user = user;
            }
            state.is_loading = false;
        }

        info!(logged_in = self.is_logged_in(), "User store initialized");
        self.emit();
    }

    /// Start a session from an auth response, or end it with `None`.
    pub fn set_user(&self, response: Option<&AuthResponse>) {
        let user = match response {
            Some(response) => match self.persist(&response.user) {
                Ok(()) => {
                    info!(user_id = %response.user.id, "User saved");
                    Some(response.user.clone())
                }
                Err(e) => {
                    error!(error = %e, "Failed to save user, staying logged out");
                    None
                }
            },
            None => {
                if let Err(e) = lock(&self.storage).delete_item(USER_STORAGE_KEY) {
                    error!(error = %e, "Failed to delete saved user");
                }
                debug!("User cleared");
                None
            }
        };

        lock(&self.state).user = user;
        self.emit();
    }

    /// Replace the current user wholesale (last write wins). On a storage
    /// failure the in-memory user is left as it was.
    pub fn update_user(&self, user: User) -> Result<(), StoreError> {
        if let Err(e) = self.persist(&user) {
            error!(user_id = %user.id, error = %e, "Failed to update saved user");
            return Err(e);
        }

        info!(user_id = %user.id, "User updated");
        lock(&self.state).user = Some(user);
        self.emit();
        Ok(())
    }

    /// End the session. Always succeeds from the caller's point of view.
    pub fn logout(&self) {
        if let Err(e) = lock(&self.storage).delete_item(USER_STORAGE_KEY) {
            warn!(error = %e, "Failed to delete saved user during logout");
        }

        lock(&self.state).user = None;
        info!("Logged out");
        self.emit();
    }

    fn persist(&self, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        lock(&self.storage).set_item(USER_STORAGE_KEY, &json)
    }

    fn emit(&self) {
        self.events.emit(StoreEvent::UserChanged {
            logged_in: self.is_logged_in(),
        });
    }
}
