use crate::error::{ErrorKind, Failure};

/// Result of one retry run.
///
/// Exactly one of [`data`](Outcome::data) and [`error`](Outcome::error)
/// is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { data: String, attempts: u32 },
    Failure(Failure),
}

impl Outcome {
    pub fn success(data: impl Into<String>, attempts: u32) -> Self {
        Outcome::Success {
            data: data.into(),
            attempts,
        }
    }

    pub fn is_success(&self) -> bool { matches!(self, Outcome::Success { .. }) }

    pub fn data(&self) -> Option<&str> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Failure> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> { self.error().map(Failure::kind) }

    /// Number of transform invocations made during the run.
    pub fn attempts(&self) -> u32 {
        match self {
            Outcome::Success { attempts, .. } => *attempts,
            Outcome::Failure(failure) => failure.attempts(),
        }
    }

    pub fn into_result(self) -> Result<String, Failure> {
        match self {
            Outcome::Success { data, .. } => Ok(data),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self { Outcome::Failure(failure) }
}
