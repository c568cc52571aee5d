//! Error types for transforms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("invalid input")]
    InvalidInput,

    #[error("{0}")]
    Failed(String),
}

impl TransformError {
    pub fn failed(message: impl Into<String>) -> Self { Self::Failed(message.into()) }
}

pub type Result<T> = std::result::Result<T, TransformError>;
