//! The transform capability.
//!
//! A transform maps an optional input to:
//!
//! - `Ok(Some(_))` when it produced a value,
//! - `Ok(None)` when there was nothing to transform,
//! - `Err(_)` when the transform itself failed.

use crate::error::Result;

pub trait Transform {
    fn apply(&self, input: Option<&str>) -> Result<Option<String>>;
}

impl<F> Transform for F
where
    F: Fn(Option<&str>) -> Result<Option<String>>,
{
    fn apply(&self, input: Option<&str>) -> Result<Option<String>> { self(input) }
}
