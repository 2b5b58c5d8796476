//! LoadMaster client errors

use thiserror::Error;

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, LoadMasterError>;

/// Errors that can occur when talking to the LoadMaster API
#[derive(Debug, Error)]
pub enum LoadMasterError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The appliance answered with a non-success status.
    ///
    /// `code` is either the HTTP status or the `code` field of the JSON
    /// envelope, whichever reported the failure.
    #[error("Code: {code}, Message: {message}")]
    Api { code: u16, message: String },

    /// Neither username/password nor an API key is configured
    #[error("missing authentication")]
    MissingAuthentication,

    /// A lookup found no matching entry
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client configuration is incomplete or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A base64 payload returned by the appliance could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl LoadMasterError {
    /// Build an API error from a status code and message
    pub fn api(code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Status code carried by an [`LoadMasterError::Api`] error
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
