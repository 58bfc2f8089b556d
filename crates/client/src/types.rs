use serde::{Deserialize, Serialize};

/// Body returned by the order endpoint.
///
/// Exactly one of `tx` and `error` is expected. `error` may be a string or
/// any other JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    /// Transaction identifier of the executed order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<String>,
    /// Relay error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl RelayResponse {
    /// A success response.
    pub fn tx(tx: impl Into<String>) -> Self {
        Self { tx: Some(tx.into()), error: None }
    }

    /// An error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self { tx: None, error: Some(serde_json::Value::String(message.into())) }
    }

    /// The error message, if present. Non-string errors are rendered as JSON.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| match error {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }
}
