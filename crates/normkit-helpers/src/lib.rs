//! Textbook helpers: arithmetic, text, arrays, math, and file I/O.
//!
//! These are independent of the normalization core. Absent inputs are
//! modelled with `Option`, and I/O failures are returned as [`HelperError`]
//! rather than logged and swallowed.
//!
//! ```
//! use normkit_helpers::{array, math, text};
//!
//! assert_eq!(text::reverse(Some("abc")), Some("cba".to_string()));
//! assert_eq!(array::find_max(Some(&[3, 9, 1][..])), Some(9));
//! assert!(math::is_prime(13));
//! assert_eq!(math::factorial(5).unwrap(), 120);
//! ```

pub use self::error::{HelperError, Result};

pub mod arith;
pub mod array;
pub mod file;
pub mod math;
pub mod text;

mod error;
