use std::process::ExitCode;

use hgshim::ui::output;

fn main() -> ExitCode {
    match hgshim::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
