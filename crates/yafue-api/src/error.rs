use thiserror::Error;

/// Errors produced by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// An id was empty or a dot segment, which would address another resource.
    #[error("Invalid path segment '{0}'")]
    InvalidPathSegment(String),

    /// Connection, TLS or body read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned {status} for {path}: {body}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    /// The body did not match the expected shape.
    #[error("Malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
