//! JSON response envelope.

use serde::{Deserialize, Serialize};
use tabula_schema::request::MutationResult;

/// The `{success, message|error}` envelope returned to the AJAX layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonEnvelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// Confirmation message, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure message, present on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonEnvelope {
    /// Creates a success envelope.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(message.into()),
        }
    }

    /// Serializes the envelope to a JSON string.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"failed to encode response"}"#.to_string()
        })
    }
}

impl From<MutationResult> for JsonEnvelope {
    fn from(result: MutationResult) -> Self {
        if result.success {
            Self::ok(result.message)
        } else {
            Self::error(result.message)
        }
    }
}
