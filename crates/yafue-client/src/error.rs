use thiserror::Error;

use yafue_api::ApiError;
use yafue_shared::ValidationError;
use yafue_store::StoreError;

/// Anything a user action can fail with.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("No user is logged in")]
    NotLoggedIn,

    /// Login succeeded but the session could not be persisted.
    #[error("Session could not be saved")]
    SessionNotSaved,

    /// The backend returned a meeting whose id is already in the store.
    #[error("Duplicate meeting id: {0}")]
    DuplicateMeeting(String),
}

impl ClientError {
    /// Text for the alert dialog. Form checks get their own message; every
    /// other failure gets the same generic one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(e) => e.to_string(),
            ClientError::NotLoggedIn => "Tenés que iniciar sesión para continuar".to_string(),
            _ => "Algo salió mal. Intentá de nuevo.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
