mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ReportError;

pub fn run() -> Result<(), ReportError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Report(a) => handlers::report(&a),
        parse::Command::Bar(a) => handlers::bar(&a),
        parse::Command::PerKg(a) => handlers::per_kg(&a),
        parse::Command::Schemes => {
            handlers::schemes();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
