//! # yafue-store
//!
//! On-device secure storage for the Ya Fue client.
//!
//! A small SQLite database (via `rusqlite`) holds string values under string
//! keys, in the manner of a platform secure store. Every value is sealed with
//! XChaCha20-Poly1305 under a key derived from a per-device secret, so the
//! database file alone does not reveal the logged-in user.

pub mod database;
pub mod key;
pub mod migrations;
pub mod secure;
pub mod settings;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use key::StorageKey;
pub use secure::SecureStorage;
pub use settings::AppSettings;
