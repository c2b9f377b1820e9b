use std::process::ExitCode;

use nutribar::cli;

fn main() -> ExitCode {
    if let Err(e) = cli::run() {
        eprintln!("nutribar: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
