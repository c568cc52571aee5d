use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, Result};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Limits for a single retry run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use normkit_retry::RetryPolicy;
///
/// let policy = RetryPolicy::new()
///     .max_attempts(5)
///     .timeout(Some(Duration::from_millis(250)))
///     .fail_fast_on_invalid(true);
///
/// assert_eq!(policy.get_max_attempts(), 5);
/// ```
///
/// Serialized form:
///
/// ```toml
/// max_attempts = 3
/// timeout_ms = 30000    # or "none"
/// fail_fast_on_invalid = false
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PolicyWire", into = "PolicyWire")]
pub struct RetryPolicy {
    max_attempts:         u32,
    timeout:              Option<Duration>,
    fail_fast_on_invalid: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self { Self::new() }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self {
            max_attempts:         DEFAULT_MAX_ATTEMPTS,
            timeout:              Some(DEFAULT_TIMEOUT),
            fail_fast_on_invalid: false,
        }
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Deadline measured from the start of the run, checked between attempts.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Stop at the first empty result instead of spending the remaining attempts.
    pub fn fail_fast_on_invalid(mut self, fail_fast: bool) -> Self {
        self.fail_fast_on_invalid = fail_fast;
        self
    }

    pub fn get_max_attempts(&self) -> u32 { self.max_attempts }

    pub fn get_timeout(&self) -> Option<Duration> { self.timeout }

    pub fn get_fail_fast_on_invalid(&self) -> bool { self.fail_fast_on_invalid }

    /// Returns a copy with every field set in `overrides` replaced.
    pub fn with_overrides(mut self, overrides: &PolicyOverrides) -> Self {
        if let Some(max_attempts) = overrides.max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.timeout = timeout.to_duration();
        }
        if let Some(fail_fast) = overrides.fail_fast_on_invalid {
            self.fail_fast_on_invalid = fail_fast;
        }
        self
    }

    /// Parses a TOML table on top of the defaults.
    ///
    /// ```
    /// use normkit_retry::RetryPolicy;
    ///
    /// let policy = RetryPolicy::from_toml_str("max_attempts = 7\ntimeout_ms = \"none\"").unwrap();
    /// assert_eq!(policy.get_max_attempts(), 7);
    /// assert_eq!(policy.get_timeout(), None);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let overrides = PolicyOverrides::from_toml_str(s)?;
        Ok(Self::new().with_overrides(&overrides))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new().with_overrides(&PolicyOverrides::load(path)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyWire {
    max_attempts:         u32,
    timeout_ms:           TimeoutMs,
    fail_fast_on_invalid: bool,
}

impl Default for PolicyWire {
    fn default() -> Self { RetryPolicy::new().into() }
}

impl From<PolicyWire> for RetryPolicy {
    fn from(wire: PolicyWire) -> Self {
        Self {
            max_attempts:         wire.max_attempts,
            timeout:              wire.timeout_ms.to_duration(),
            fail_fast_on_invalid: wire.fail_fast_on_invalid,
        }
    }
}

impl From<RetryPolicy> for PolicyWire {
    fn from(policy: RetryPolicy) -> Self {
        Self {
            max_attempts:         policy.max_attempts,
            timeout_ms:           TimeoutMs::from_duration(policy.timeout),
            fail_fast_on_invalid: policy.fail_fast_on_invalid,
        }
    }
}

/// Deadline as written in config and flags: milliseconds, or `none`.
///
/// `0` is an already-expired deadline, not "disabled"; it matches
/// `RetryPolicy::timeout(Some(Duration::ZERO))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimeoutWire", into = "TimeoutWire")]
pub enum TimeoutMs {
    After(u64),
    Disabled,
}

impl Default for TimeoutMs {
    fn default() -> Self { Self::from_duration(Some(DEFAULT_TIMEOUT)) }
}

impl TimeoutMs {
    pub fn to_duration(self) -> Option<Duration> {
        match self {
            TimeoutMs::After(ms) => Some(Duration::from_millis(ms)),
            TimeoutMs::Disabled => None,
        }
    }

    /// Sub-millisecond precision is truncated.
    pub fn from_duration(timeout: Option<Duration>) -> Self {
        match timeout {
            Some(d) => TimeoutMs::After(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => TimeoutMs::Disabled,
        }
    }
}

impl fmt::Display for TimeoutMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutMs::After(ms) => write!(f, "{ms}"),
            TimeoutMs::Disabled => f.write_str("none"),
        }
    }
}

impl FromStr for TimeoutMs {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(TimeoutMs::Disabled);
        }
        s.parse()
            .map(TimeoutMs::After)
            .map_err(|_| format!("expected milliseconds or \"none\", got {s:?}"))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TimeoutWire {
    Millis(u64),
    Keyword(String),
}

impl TryFrom<TimeoutWire> for TimeoutMs {
    type Error = String;

    fn try_from(wire: TimeoutWire) -> std::result::Result<Self, Self::Error> {
        match wire {
            TimeoutWire::Millis(ms) => Ok(TimeoutMs::After(ms)),
            TimeoutWire::Keyword(s) => s.parse(),
        }
    }
}

impl From<TimeoutMs> for TimeoutWire {
    fn from(timeout: TimeoutMs) -> Self {
        match timeout {
            TimeoutMs::After(ms) => TimeoutWire::Millis(ms),
            TimeoutMs::Disabled => TimeoutWire::Keyword("none".to_string()),
        }
    }
}

/// Partial policy as written in a config file or collected from flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverrides {
    pub max_attempts:         Option<u32>,
    pub timeout_ms:           Option<TimeoutMs>,
    pub fail_fast_on_invalid: Option<bool>,
}

impl PolicyOverrides {
    pub fn from_toml_str(s: &str) -> Result<Self> { Ok(toml::from_str(s)?) }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PolicyError::Read {
            path:   path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Fields set in `other` win.
    pub fn merge(self, other: PolicyOverrides) -> Self {
        Self {
            max_attempts:         other.max_attempts.or(self.max_attempts),
            timeout_ms:           other.timeout_ms.or(self.timeout_ms),
            fail_fast_on_invalid: other.fail_fast_on_invalid.or(self.fail_fast_on_invalid),
        }
    }
}
