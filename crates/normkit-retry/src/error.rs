//! Error types for retry execution and policy loading.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use normkit_transform::TransformError;
use thiserror::Error;

/// Coarse classification of a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed validation and the policy asked to stop early.
    InvalidInput,
    /// The transform returned an error on the final attempt.
    TransformError,
    /// Every attempt was spent without producing a value.
    RetriesExhausted,
    /// The policy deadline passed between attempts.
    TimedOut,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::TransformError => "transform_error",
            ErrorKind::RetriesExhausted => "retries_exhausted",
            ErrorKind::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Why a retry run did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("invalid input")]
    InvalidInput { attempts: u32 },

    #[error("{source}")]
    Transform {
        attempts: u32,
        #[source]
        source:   TransformError,
    },

    #[error("Max retries exceeded")]
    RetriesExhausted { attempts: u32 },

    #[error("timed out after {elapsed:?} ({attempts} attempts)")]
    TimedOut { attempts: u32, elapsed: Duration },
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Failure::InvalidInput { .. } => ErrorKind::InvalidInput,
            Failure::Transform { .. } => ErrorKind::TransformError,
            Failure::RetriesExhausted { .. } => ErrorKind::RetriesExhausted,
            Failure::TimedOut { .. } => ErrorKind::TimedOut,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Failure::InvalidInput { attempts }
            | Failure::Transform { attempts, .. }
            | Failure::RetriesExhausted { attempts }
            | Failure::TimedOut { attempts, .. } => *attempts,
        }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file {path}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid policy: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown domain: {0}")]
pub struct ParseDomainError(pub String);

pub type Result<T> = std::result::Result<T, PolicyError>;
