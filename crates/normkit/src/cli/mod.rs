use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub mod info;
pub mod normalize;
pub mod util;

#[derive(Clone, Debug, Parser)]
#[command(name="normkit",version=env!("CARGO_PKG_VERSION"),about,long_about=None,propagate_version=true)]
pub struct App {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "i", name = "info", about = "Describe one or all domains")]
    Info(info::InfoArg),
    #[command(alias = "c", name = "check", about = "Report whether input is usable")]
    Check(normalize::CheckArg),
    #[command(alias = "n", name = "normalize", about = "Trim and lowercase input with retry")]
    Normalize(normalize::NormalizeArg),
    #[command(subcommand, alias = "u", name = "util", about = "Run a standalone helper")]
    Util(util::UtilCommands),
}

impl App {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        match self.cmd {
            Commands::Info(arg) => arg.run(),
            Commands::Check(arg) => arg.run(),
            Commands::Normalize(arg) => arg.run(),
            Commands::Util(cmd) => cmd.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use normkit_retry::TimeoutMs;

    #[test]
    fn test_command_is_well_formed() { App::command().debug_assert(); }

    #[test]
    fn test_parse_normalize_flags() {
        let app = App::try_parse_from([
            "normkit",
            "-v",
            "normalize",
            "--domain",
            "math-utils",
            "--max-attempts",
            "5",
            "--fail-fast",
            "  Hi  ",
        ])
        .unwrap();

        assert_eq!(app.verbose, 1);
        let Commands::Normalize(arg) = app.cmd else {
            panic!("expected normalize");
        };
        assert_eq!(arg.input.as_deref(), Some("  Hi  "));
        assert_eq!(arg.max_attempts, Some(5));
        assert!(arg.fail_fast);
    }

    #[test]
    fn test_parse_util_max_with_negative_values() {
        let app = App::try_parse_from(["normkit", "util", "max", "-3", "-7"]).unwrap();
        let Commands::Util(util::UtilCommands::Max { values }) = app.cmd else {
            panic!("expected util max");
        };
        assert_eq!(values, vec![-3, -7]);
    }

    #[test]
    fn test_parse_util_read() {
        let app = App::try_parse_from(["normkit", "u", "read", "/tmp/notes.txt"]).unwrap();
        let Commands::Util(util::UtilCommands::Read { path }) = app.cmd else {
            panic!("expected util read");
        };
        assert_eq!(path, std::path::PathBuf::from("/tmp/notes.txt"));
    }

    #[test]
    fn test_parse_info_with_domain() {
        let app = App::try_parse_from(["normkit", "info", "string-utils"]).unwrap();
        let Commands::Info(arg) = app.cmd else {
            panic!("expected info");
        };
        assert_eq!(arg.domain, Some(normkit_retry::Domain::StringUtils));

        let app = App::try_parse_from(["normkit", "i"]).unwrap();
        assert!(matches!(app.cmd, Commands::Info(info::InfoArg { domain: None })));
    }

    #[test]
    fn test_parse_check_blank() {
        let app = App::try_parse_from(["normkit", "check", "  "]).unwrap();
        let Commands::Check(arg) = app.cmd else {
            panic!("expected check");
        };
        assert_eq!(arg.input.as_deref(), Some("  "));
    }

    #[test]
    fn test_parse_timeout_forms() {
        let parse = |value: &str| {
            let app = App::try_parse_from(["normkit", "normalize", "--timeout-ms", value, "x"]).unwrap();
            let Commands::Normalize(arg) = app.cmd else {
                panic!("expected normalize");
            };
            arg.timeout_ms
        };
        assert_eq!(parse("none"), Some(TimeoutMs::Disabled));
        assert_eq!(parse("0"), Some(TimeoutMs::After(0)));
        assert!(App::try_parse_from(["normkit", "normalize", "--timeout-ms", "later", "x"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_domain() {
        let res = App::try_parse_from(["normkit", "normalize", "--domain", "nope", "x"]);
        assert!(res.is_err());
    }
}
