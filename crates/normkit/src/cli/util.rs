use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Subcommand;
use normkit_helpers::{array, file, math, text};

#[derive(Clone, Debug, Subcommand)]
pub enum UtilCommands {
    #[command(name = "reverse")]
    Reverse { input: String },
    #[command(name = "factorial")]
    Factorial { n: u32 },
    #[command(name = "is-prime")]
    IsPrime {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    #[command(name = "max")]
    Max {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    #[command(name = "sort")]
    Sort {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    #[command(name = "read")]
    Read { path: PathBuf },
    #[command(name = "write")]
    Write { path: PathBuf, content: String },
}

impl UtilCommands {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        match self.render()? {
            Some(line) => {
                println!("{line}");
                Ok(ExitCode::SUCCESS)
            }
            None => Ok(ExitCode::FAILURE),
        }
    }

    /// `None` means the helper had no answer, e.g. `max` of nothing.
    fn render(self) -> anyhow::Result<Option<String>> {
        let line = match self {
            UtilCommands::Reverse { input } => text::reverse(Some(&input)),
            UtilCommands::Factorial { n } => Some(math::factorial(n)?.to_string()),
            UtilCommands::IsPrime { n } => Some(math::is_prime(n).to_string()),
            UtilCommands::Max { values } => array::find_max(Some(values.as_slice())).map(|m| m.to_string()),
            UtilCommands::Sort { values } => array::sort(Some(values)).map(|v| {
                v.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
            }),
            UtilCommands::Read { path } => Some(
                file::read_from_file(&path).with_context(|| format!("reading {}", path.display()))?,
            ),
            UtilCommands::Write { path, content } => {
                file::write_to_file(&path, &content)
                    .with_context(|| format!("writing {}", path.display()))?;
                Some(format!("wrote {}", path.display()))
            }
        };
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_pure_helpers() {
        let out = |cmd: UtilCommands| cmd.render().unwrap();

        assert_eq!(out(UtilCommands::Reverse { input: "abc".into() }).as_deref(), Some("cba"));
        assert_eq!(out(UtilCommands::Factorial { n: 6 }).as_deref(), Some("720"));
        assert_eq!(out(UtilCommands::IsPrime { n: 97 }).as_deref(), Some("true"));
        assert_eq!(out(UtilCommands::Max { values: vec![-3, 4, 1] }).as_deref(), Some("4"));
        assert_eq!(out(UtilCommands::Max { values: vec![] }), None);
        assert_eq!(out(UtilCommands::Sort { values: vec![3, 1, 2] }).as_deref(), Some("1 2 3"));
    }

    #[test]
    fn test_factorial_overflow_is_error() {
        assert!(UtilCommands::Factorial { n: 30 }.render().is_err());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        UtilCommands::Write {
            path:    path.clone(),
            content: "hi".into(),
        }
        .render()
        .unwrap();
        let read = UtilCommands::Read { path }.render().unwrap();
        assert_eq!(read.as_deref(), Some("hi"));
    }
}
