//! Bounded retry around a [`Transform`](normkit_transform::Transform).
//!
//! A [`RetryRunner`] calls a transform at most [`RetryPolicy::get_max_attempts`]
//! times and turns whatever happened into an [`Outcome`]. Nothing is ever
//! propagated to the caller: transform errors, blank input, and deadline
//! expiry all become an [`Outcome::Failure`] carrying a structured [`Failure`].
//!
//! # Example
//!
//! ```
//! use normkit_retry::{ErrorKind, execute_with_retry};
//!
//! let ok = execute_with_retry(Some("  Hello World  "));
//! assert_eq!(ok.data(), Some("hello world"));
//!
//! let blank = execute_with_retry(None);
//! assert_eq!(blank.kind(), Some(ErrorKind::RetriesExhausted));
//! assert_eq!(blank.error().unwrap().to_string(), "Max retries exceeded");
//! ```

pub use self::domain::Domain;
pub use self::error::{ErrorKind, Failure, ParseDomainError, PolicyError, Result};
pub use self::outcome::Outcome;
pub use self::policy::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT, PolicyOverrides, RetryPolicy, TimeoutMs};
pub use self::runner::{RetryRunner, execute_with_retry};

mod domain;
mod error;
mod outcome;
mod policy;
mod runner;
