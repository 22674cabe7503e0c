use std::process::ExitCode;

use clap::Parser;
use lingot::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match lingot::cli::run_cli(args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
