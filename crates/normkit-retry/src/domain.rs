//! The utility domains that share the normalize-with-retry core.

use std::fmt;
use std::str::FromStr;

use normkit_transform::Normalizer;

use crate::error::ParseDomainError;
use crate::outcome::Outcome;
use crate::runner::RetryRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Calculator,
    StringUtils,
    ArrayHelper,
    FileHandler,
    MathUtils,
    DateUtils,
    NetworkUtils,
    DatabaseHelper,
    EncryptionUtils,
    ValidationUtils,
}

impl Domain {
    pub const ALL: [Domain; 10] = [
        Domain::Calculator,
        Domain::StringUtils,
        Domain::ArrayHelper,
        Domain::FileHandler,
        Domain::MathUtils,
        Domain::DateUtils,
        Domain::NetworkUtils,
        Domain::DatabaseHelper,
        Domain::EncryptionUtils,
        Domain::ValidationUtils,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Domain::Calculator => "calculator",
            Domain::StringUtils => "string-utils",
            Domain::ArrayHelper => "array-helper",
            Domain::FileHandler => "file-handler",
            Domain::MathUtils => "math-utils",
            Domain::DateUtils => "date-utils",
            Domain::NetworkUtils => "network-utils",
            Domain::DatabaseHelper => "database-helper",
            Domain::EncryptionUtils => "encryption-utils",
            Domain::ValidationUtils => "validation-utils",
        }
    }

    pub fn info(&self) -> &'static str {
        match self {
            Domain::Calculator => "Basic arithmetic operations",
            Domain::StringUtils => "String manipulation utilities",
            Domain::ArrayHelper => "Array processing utilities",
            Domain::FileHandler => "File I/O operations",
            Domain::MathUtils => "Mathematical functions",
            Domain::DateUtils => "Date and time utilities",
            Domain::NetworkUtils => "Network operations",
            Domain::DatabaseHelper => "Database operations",
            Domain::EncryptionUtils => "Encryption and security",
            Domain::ValidationUtils => "Input validation utilities",
        }
    }

    /// All domains normalize the same way.
    pub fn normalizer(&self) -> Normalizer { Normalizer }

    pub fn is_valid(&self, input: Option<&str>) -> bool { normkit_transform::is_valid(input) }

    pub fn process(&self, input: Option<&str>) -> Option<String> { normkit_transform::process(input) }

    pub fn execute_with_retry(&self, input: Option<&str>) -> Outcome {
        self.execute_with(&RetryRunner::default(), input)
    }

    pub fn execute_with(&self, runner: &RetryRunner, input: Option<&str>) -> Outcome {
        let _span = tracing::debug_span!("domain", name = self.name()).entered();
        runner.execute(&self.normalizer(), input)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Domain {
    type Err = ParseDomainError;

    /// Accepts `math-utils`, `math_utils` or `MathUtils`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Domain::ALL
            .into_iter()
            .find(|d| d.name().replace('-', "") == wanted)
            .ok_or_else(|| ParseDomainError(s.to_string()))
    }
}
