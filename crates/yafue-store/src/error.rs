use thiserror::Error;

use yafue_shared::CryptoError;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the data directory or key file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// Hex decoding error (device key file).
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Sealing or unsealing a stored value failed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// An unsealed value was not valid UTF-8.
    #[error("Stored value under '{0}' is not valid UTF-8")]
    Encoding(String),

    /// JSON (de)serialization of a stored record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
