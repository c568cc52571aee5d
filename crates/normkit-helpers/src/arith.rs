//! Integer arithmetic.
//!
//! [`add`] and [`subtract`] wrap on overflow like two's-complement hardware;
//! the `checked_*` forms return `None` instead.

pub fn add(a: i64, b: i64) -> i64 { a.wrapping_add(b) }

pub fn subtract(a: i64, b: i64) -> i64 { a.wrapping_sub(b) }

pub fn checked_add(a: i64, b: i64) -> Option<i64> { a.checked_add(b) }

pub fn checked_subtract(a: i64, b: i64) -> Option<i64> { a.checked_sub(b) }
