//! Error types for the admin boundary.

use thiserror::Error;

/// Admin-boundary errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A required request field is absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// The request named an action the engine does not know.
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    /// The request body is not a JSON object.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// JSON parsing error.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine error.
    #[error(transparent)]
    Schema(#[from] tabula_schema::error::SchemaError),
}

/// Result type alias for admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;
