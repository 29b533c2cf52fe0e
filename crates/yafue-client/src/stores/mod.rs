//! Client-side state containers.
//!
//! Stores are plain values handed to whoever needs them (see
//! [`AppState`](crate::state::AppState)); there are no global singletons.
//! Each store guards its state with a mutex that is never held across an
//! `.await`, so readers always observe a fully applied transition.

pub mod meeting;
pub mod user;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use meeting::{MeetingDraftPatch, MeetingState, MeetingStore};
pub use user::UserStore;

/// Lock a store mutex. Store state stays consistent even if a holder
/// panicked, so poisoning is ignored.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
