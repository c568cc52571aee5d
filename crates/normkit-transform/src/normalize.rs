use crate::error::{Result, TransformError};
use crate::transform::Transform;

/// Returns `true` when `input` is present and not blank after trimming.
///
/// Blank means Unicode `White_Space` as trimmed by [`str::trim`], so U+3000 is
/// blank while control characters such as U+0001 are content.
///
/// # Examples
///
/// ```
/// use normkit_transform::is_valid;
///
/// assert!(is_valid(Some("a")));
/// assert!(!is_valid(Some(" \t\n")));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid(input: Option<&str>) -> bool { input.is_some_and(|s| !s.trim().is_empty()) }

/// Like [`is_valid`], but hands back the input for `?` chains.
pub fn validate(input: Option<&str>) -> Result<&str> {
    match input {
        Some(s) if is_valid(Some(s)) => Ok(s),
        _ => Err(TransformError::InvalidInput),
    }
}

/// Trims and lower-cases a valid input. Invalid input yields `None`.
pub fn process(input: Option<&str>) -> Option<String> {
    validate(input).ok().map(|s| s.trim().to_lowercase())
}

/// Trim + lowercase normalizer shared by every domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer;

impl Transform for Normalizer {
    fn apply(&self, input: Option<&str>) -> Result<Option<String>> { Ok(process(input)) }
}
