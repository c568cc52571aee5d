use crate::error::{HelperError, Result};

pub fn power(base: f64, exponent: f64) -> f64 { base.powf(exponent) }

/// `n!` for `n >= 2`, and 1 otherwise. Overflows past `20!`.
pub fn factorial(n: u32) -> Result<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(HelperError::Overflow("factorial"))
    })
}

/// Trial division up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2i64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
