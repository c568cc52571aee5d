//! Validation and normalization of optional text input.
//!
//! # Architecture
//!
//! Normalization is a capability, not a class hierarchy. The [`Transform`]
//! trait is the only contract between a retry runner and the code that turns
//! raw input into canonical form. [`Normalizer`] is the shipped
//! implementation.
//!
//! # Example
//!
//! ```
//! use normkit_transform::{Normalizer, Transform, is_valid, process};
//!
//! assert!(is_valid(Some("abc")));
//! assert!(!is_valid(Some("   ")));
//! assert_eq!(process(Some("  Hello ")), Some("hello".to_string()));
//!
//! let out = Normalizer.apply(Some("MiXeD")).unwrap();
//! assert_eq!(out.as_deref(), Some("mixed"));
//! ```

pub use self::error::{Result, TransformError};
pub use self::normalize::{Normalizer, is_valid, process, validate};
pub use self::transform::Transform;

mod error;
mod normalize;
mod transform;
