// ABOUTME: Defines all error types for the webedit library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under WebEditError.

/// Top-level error type for the webedit library.
#[derive(Debug, thiserror::Error)]
pub enum WebEditError {
    #[error("Paste error: {0}")]
    Paste(#[from] PasteError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the remote paste service.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Response is missing field '{0}'")]
    MissingField(String),

    #[error("Field '{field}' is not {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from reading a downloaded editor document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document is not a JSON object")]
    NotAnObject,

    #[error("Document has no node array")]
    MissingNodes,
}

/// Errors from decoding a single node entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeDecodeError {
    #[error("Node entry is not a JSON object")]
    NotAnObject,

    #[error("Node entry has no permission")]
    MissingPermission,

    #[error("Node field '{field}' is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
