//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while retrieving a monitor board.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid school configuration: {0}")]
    Configuration(#[from] subboard_core::monitor::IdentityError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    ServerError { status: u16, body: String },

    /// The service reports domain errors inside success-status bodies.
    #[error("Monitor API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
