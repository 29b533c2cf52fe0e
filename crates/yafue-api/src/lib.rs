//! # yafue-api
//!
//! Typed async client for the Ya Fue REST backend.
//!
//! Each resource module (`users`, `groups`, `meetings`, `expenses`) adds
//! methods to [`ApiClient`]; one method performs exactly one HTTP request.
//! There are no retries, timeouts or caches: a failure is returned to the
//! caller as an [`ApiError`] and the user retries manually.

pub mod client;
pub mod expenses;
pub mod groups;
pub mod meetings;
pub mod service;
pub mod users;

mod error;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use service::MeetingService;
