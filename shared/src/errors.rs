//! Shared error types for the pairing system

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid {kind} identifier: {input:?}")]
    InvalidIdentifier { kind: &'static str, input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
