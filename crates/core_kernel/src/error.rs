//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid reference number: {0}")]
    InvalidReferenceNumber(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        CoreError::InvalidReferenceNumber(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
