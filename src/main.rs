use dolist::commands::Cli;
use dolist::libs::messages::macros::init_tracing;
use dolist::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
