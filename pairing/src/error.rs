//! Pairing-specific error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairingError {
    #[error("Storage operation failed: {operation} on {path}")]
    Storage {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Notification to {member} failed: {message}")]
    Notification { member: String, message: String },
}

impl PairingError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type PairingResult<T> = Result<T, PairingError>;
