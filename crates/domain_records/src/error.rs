//! Record model errors

use thiserror::Error;

/// Errors that can occur in the record model
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RecordError {
    pub fn validation(message: impl Into<String>) -> Self {
        RecordError::Validation(message.into())
    }
}
