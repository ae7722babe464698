//! Error types for the schema mutation engine.

/// Errors that can occur while planning or applying a schema mutation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Input failed validation before any statement was built.
    #[error("validation error: {0}")]
    Validation(String),

    /// The active dialect does not support the requested mutation.
    #[error("'{dialect}' does not support {operation}")]
    Unsupported {
        /// Dialect name.
        dialect: &'static str,
        /// Human-readable operation name.
        operation: &'static str,
    },

    /// Table or column metadata could not be read or parsed.
    #[error("introspection error: {0}")]
    Introspection(String),

    /// The connection rejected a statement.
    #[error("execution error: {0}")]
    Execution(#[from] sqlx::Error),
}

impl SchemaError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an introspection error.
    pub fn introspection(message: impl Into<String>) -> Self {
        Self::Introspection(message.into())
    }
}

/// Result type for schema mutation operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
