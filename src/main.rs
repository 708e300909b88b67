use std::process::ExitCode;

use git_get::cli;
use git_get::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::from(cli::exit_code(&err))
        }
    }
}
