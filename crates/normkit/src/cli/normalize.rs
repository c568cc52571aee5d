use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use normkit_retry::{Domain, Outcome, PolicyOverrides, RetryPolicy, RetryRunner, TimeoutMs};
use serde::Serialize;

#[derive(Clone, Debug, Args)]
pub struct CheckArg {
    /// Raw input; omit to check the absent case
    pub input: Option<String>,
}

impl CheckArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        if normkit_transform::is_valid(self.input.as_deref()) {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("invalid");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArg {
    #[arg(short, long, default_value = "string-utils")]
    pub domain: Domain,

    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Deadline in milliseconds, or `none`; 0 expires after the first attempt
    #[arg(long)]
    pub timeout_ms: Option<TimeoutMs>,

    /// Stop at the first invalid result
    #[arg(long)]
    pub fail_fast: bool,

    /// TOML file with `max_attempts`, `timeout_ms`, `fail_fast_on_invalid`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Raw input; omit to normalize the absent case
    pub input: Option<String>,
}

impl NormalizeArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let policy = self.policy()?;
        tracing::debug!(domain = %self.domain, ?policy, "normalizing");

        let outcome = self
            .domain
            .execute_with(&RetryRunner::new(policy), self.input.as_deref());

        if self.json {
            let report = Report::from(&outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            match &outcome {
                Outcome::Success { data, .. } => println!("{data}"),
                Outcome::Failure(failure) => eprintln!("{failure}"),
            }
        }

        Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Defaults, then the config file, then flags.
    fn policy(&self) -> anyhow::Result<RetryPolicy> {
        let file = match &self.config {
            Some(path) => PolicyOverrides::load(path)
                .with_context(|| format!("loading retry policy from {}", path.display()))?,
            None => PolicyOverrides::default(),
        };
        let flags = PolicyOverrides {
            max_attempts:         self.max_attempts,
            timeout_ms:           self.timeout_ms,
            fail_fast_on_invalid: self.fail_fast.then_some(true),
        };
        Ok(RetryPolicy::new().with_overrides(&file.merge(flags)))
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct Report<'a> {
    success:  bool,
    data:     Option<&'a str>,
    error:    Option<String>,
    kind:     Option<&'static str>,
    attempts: u32,
}

impl<'a> From<&'a Outcome> for Report<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        Self {
            success:  outcome.is_success(),
            data:     outcome.data(),
            error:    outcome.error().map(ToString::to_string),
            kind:     outcome.kind().map(|k| k.as_str()),
            attempts: outcome.attempts(),
        }
    }
}
