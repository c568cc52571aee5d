use std::time::Instant;

use normkit_transform::{Normalizer, Transform};
use tracing::{debug, warn};

use crate::error::Failure;
use crate::outcome::Outcome;
use crate::policy::RetryPolicy;

/// Runs a transform until it yields a value or the policy is spent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RetryRunner {
    policy: RetryPolicy,
}

impl RetryRunner {
    pub fn new(policy: RetryPolicy) -> Self { Self { policy } }

    pub fn policy(&self) -> &RetryPolicy { &self.policy }

    /// Every invocation counts as an attempt, including ones that return
    /// `Ok(None)`. The deadline is checked before each attempt after the first.
    pub fn execute<T>(&self, transform: &T, input: Option<&str>) -> Outcome
    where
        T: Transform + ?Sized,
    {
        let max_attempts = self.policy.get_max_attempts();
        let started = Instant::now();
        let mut attempts = 0;

        while attempts < max_attempts {
            if attempts > 0 {
                if let Some(timeout) = self.policy.get_timeout() {
                    let elapsed = started.elapsed();
                    if elapsed >= timeout {
                        warn!(attempts, ?elapsed, "retry deadline reached");
                        return Failure::TimedOut { attempts, elapsed }.into();
                    }
                }
            }

            let result = transform.apply(input);
            attempts += 1;

            match result {
                Ok(Some(data)) => {
                    debug!(attempt = attempts, "transform succeeded");
                    return Outcome::success(data, attempts);
                }
                Ok(None) if self.policy.get_fail_fast_on_invalid() => {
                    debug!(attempt = attempts, "invalid input, failing fast");
                    return Failure::InvalidInput { attempts }.into();
                }
                Ok(None) => {
                    debug!(attempt = attempts, max_attempts, "transform produced nothing");
                }
                Err(source) if attempts >= max_attempts => {
                    warn!(attempts, error = %source, "transform failed on final attempt");
                    return Failure::Transform { attempts, source }.into();
                }
                Err(error) => {
                    debug!(attempt = attempts, max_attempts, %error, "transform failed, retrying");
                }
            }
        }

        warn!(attempts, "retries exhausted");
        Failure::RetriesExhausted { attempts }.into()
    }
}

/// Normalizes `input` with the default policy.
pub fn execute_with_retry(input: Option<&str>) -> Outcome {
    RetryRunner::default().execute(&Normalizer, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use normkit_transform::{Result, TransformError};
    use std::cell::Cell;
    use std::time::Duration;

    struct Flaky {
        failures: u32,
        calls:    Cell<u32>,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: Cell::new(0),
            }
        }
    }

    impl Transform for Flaky {
        fn apply(&self, input: Option<&str>) -> Result<Option<String>> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call <= self.failures {
                return Err(TransformError::failed(format!("failure {call}")));
            }
            Ok(input.map(str::to_owned))
        }
    }

    #[test]
    fn test_success_on_first_attempt() {
        let outcome = execute_with_retry(Some("  Hello World  "));
        assert_eq!(outcome, Outcome::success("hello world", 1));
    }

    #[test]
    fn test_absent_input_terminates_after_max_attempts() {
        let outcome = execute_with_retry(None);
        assert_eq!(outcome.kind(), Some(ErrorKind::RetriesExhausted));
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(outcome.error().unwrap().to_string(), "Max retries exceeded");
    }

    #[test]
    fn test_empty_input_matches_absent_input() {
        assert_eq!(execute_with_retry(Some("")), execute_with_retry(None));
        assert_eq!(execute_with_retry(Some("   ")), execute_with_retry(None));
    }

    #[test]
    fn test_recovers_after_transient_failures() {
        let flaky = Flaky::new(2);
        let outcome = RetryRunner::default().execute(&flaky, Some("v"));
        assert_eq!(outcome, Outcome::success("v", 3));
        assert_eq!(flaky.calls.get(), 3);
    }

    #[test]
    fn test_persistent_failure_reports_last_error() {
        let flaky = Flaky::new(u32::MAX);
        let outcome = RetryRunner::default().execute(&flaky, Some("v"));

        assert_eq!(outcome.kind(), Some(ErrorKind::TransformError));
        assert_eq!(outcome.error().unwrap().to_string(), "failure 3");
        assert_eq!(flaky.calls.get(), 3);
    }

    #[test]
    fn test_fail_fast_on_invalid() {
        let runner = RetryRunner::new(RetryPolicy::new().fail_fast_on_invalid(true));
        let outcome = runner.execute(&Normalizer, Some(" "));
        assert_eq!(outcome, Outcome::Failure(Failure::InvalidInput { attempts: 1 }));
    }

    #[test]
    fn test_zero_attempts() {
        let calls = Cell::new(0);
        let counting = |input: Option<&str>| -> Result<Option<String>> {
            calls.set(calls.get() + 1);
            Ok(input.map(str::to_owned))
        };
        let runner = RetryRunner::new(RetryPolicy::new().max_attempts(0));

        let outcome = runner.execute(&counting, Some("x"));
        assert_eq!(outcome, Outcome::Failure(Failure::RetriesExhausted { attempts: 0 }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_zero_timeout_allows_one_attempt() {
        let flaky = Flaky::new(u32::MAX);
        let runner = RetryRunner::new(RetryPolicy::new().max_attempts(10).timeout(Some(Duration::ZERO)));

        let outcome = runner.execute(&flaky, Some("x"));
        assert_eq!(outcome.kind(), Some(ErrorKind::TimedOut));
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(flaky.calls.get(), 1);
    }

    #[test]
    fn test_zero_timeout_still_returns_first_success() {
        let runner = RetryRunner::new(RetryPolicy::new().timeout(Some(Duration::ZERO)));
        assert_eq!(runner.execute(&Normalizer, Some("A")), Outcome::success("a", 1));
    }

    #[test]
    fn test_trait_object_transform() {
        let transform: Box<dyn Transform> = Box::new(Flaky::new(1));
        let outcome = RetryRunner::default().execute(transform.as_ref(), Some("dyn"));
        assert_eq!(outcome, Outcome::success("dyn", 2));
    }
}
