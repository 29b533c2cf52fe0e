//! Screen-level actions.
//!
//! Each sub-module groups the actions of one screen. Handlers take the
//! shared [`AppState`](crate::state::AppState), call the backend and update
//! the stores; errors come back as [`ClientError`](crate::ClientError) with a
//! [`user_message`](crate::ClientError::user_message) ready for the alert.

pub mod auth;
pub mod expenses;
pub mod groups;
pub mod home;
pub mod meetings;
pub mod profile;
pub mod settings;
