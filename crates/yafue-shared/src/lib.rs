//! # yafue-shared
//!
//! Types shared by every Ya Fue crate: the entities exchanged with the
//! backend, request payloads, client-side form validation, constants and the
//! sealing helpers used by the on-device store.

pub mod constants;
pub mod crypto;
pub mod error;
pub mod models;
pub mod requests;
pub mod types;
pub mod validation;

pub use error::{CryptoError, ValidationError};
pub use models::*;
pub use requests::*;
pub use types::*;
