use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Stored data is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Storage write failed: {0}")]
    StorageWriteFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Remote error: {message}")]
    Remote { message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u32),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl ChatError {
    pub fn remote(message: impl Into<String>) -> Self {
        ChatError::Remote {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
