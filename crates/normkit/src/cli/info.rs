use std::process::ExitCode;

use clap::Args;
use normkit_retry::Domain;

#[derive(Clone, Debug, Args)]
pub struct InfoArg {
    /// Domain name, e.g. `string-utils`; all domains when omitted
    pub domain: Option<Domain>,
}

impl InfoArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(ExitCode::SUCCESS)
    }

    fn lines(&self) -> Vec<String> {
        match self.domain {
            Some(d) => vec![d.info().to_string()],
            None => Domain::ALL
                .iter()
                .map(|d| format!("{:<18}{}", d.name(), d.info()))
                .collect(),
        }
    }
}
