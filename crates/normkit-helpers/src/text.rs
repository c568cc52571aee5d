/// Reverses by Unicode scalar value.
pub fn reverse(s: Option<&str>) -> Option<String> { s.map(|s| s.chars().rev().collect()) }

/// Absent or zero-length. Whitespace counts as content here.
pub fn is_empty(s: Option<&str>) -> bool { s.is_none_or(str::is_empty) }
