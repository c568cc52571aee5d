use std::process::ExitCode;

use clap::Parser;

use crate::cli::App;

mod cli;
mod logging;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match app.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
